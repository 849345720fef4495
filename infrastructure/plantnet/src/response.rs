use serde::Deserialize;

use business::domain::identification::model::{
    SpeciesMatch, UNKNOWN_FAMILY, UNKNOWN_GENUS, UNKNOWN_SPECIES,
};

/// Body of a 200 answer from the identify endpoint.
#[derive(Debug, Deserialize)]
pub struct IdentifyResponse {
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

/// One element of the `results` array. Every field is optional so a partial
/// record degrades to its sentinels instead of failing the whole batch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResultEntry {
    pub score: f64,
    pub species: Option<SpeciesEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpeciesEntry {
    #[serde(rename = "scientificNameWithoutAuthor")]
    pub scientific_name: Option<String>,
    #[serde(rename = "commonNames")]
    pub common_names: Vec<String>,
    pub family: Option<TaxonEntry>,
    pub genus: Option<TaxonEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaxonEntry {
    #[serde(rename = "scientificNameWithoutAuthor")]
    pub scientific_name: Option<String>,
}

fn taxon_name(taxon: Option<TaxonEntry>, sentinel: &str) -> String {
    taxon
        .and_then(|t| t.scientific_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| sentinel.to_string())
}

impl ResultEntry {
    fn into_species_match(self) -> SpeciesMatch {
        let species = self.species.unwrap_or_default();

        SpeciesMatch {
            scientific_name: species
                .scientific_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_SPECIES.to_string()),
            common_names: species.common_names,
            family: taxon_name(species.family, UNKNOWN_FAMILY),
            genus: taxon_name(species.genus, UNKNOWN_GENUS),
            score: self.score.clamp(0.0, 1.0),
        }
    }
}

/// Parses a 200 body into domain matches, preserving the API's order.
pub fn parse_matches(body: &str) -> Result<Vec<SpeciesMatch>, serde_json::Error> {
    let response: IdentifyResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .map(ResultEntry::into_species_match)
        .collect())
}
