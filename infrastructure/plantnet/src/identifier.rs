use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::identification::model::IdentificationRequest;
use business::domain::identification::services::{ClassificationOutcome, PlantClassifierService};

use crate::client::PlantNetClient;
use crate::response;

pub struct PlantClassifierPlantNet {
    client: PlantNetClient,
}

impl PlantClassifierPlantNet {
    pub fn new(client: PlantNetClient) -> Self {
        Self { client }
    }

    /// One part per image under the shared `images` field, each with a
    /// distinct generated filename and a PNG content type.
    fn build_form(request: &IdentificationRequest) -> Result<Form, String> {
        let mut form = Form::new();
        for (i, image) in request.images().iter().enumerate() {
            let part = Part::bytes(image.bytes.clone())
                .file_name(format!("img{}.png", i + 1))
                .mime_str("image/png")
                .map_err(|e| e.to_string())?;
            form = form.part("images", part);
        }
        Ok(form)
    }
}

/// Maps a completed HTTP exchange onto a classification outcome.
///
/// Non-200 bodies are kept verbatim and never parsed as JSON. A 200 body
/// that fails to parse counts as transport corruption, not an API error.
fn outcome_from_response(status: u16, body: String) -> ClassificationOutcome {
    if status != 200 {
        return ClassificationOutcome::ApiError { status, body };
    }

    match response::parse_matches(&body) {
        Ok(matches) if matches.is_empty() => ClassificationOutcome::Empty,
        Ok(matches) => ClassificationOutcome::Matches(matches),
        Err(e) => ClassificationOutcome::NetworkError(format!("malformed response body: {}", e)),
    }
}

#[async_trait]
impl PlantClassifierService for PlantClassifierPlantNet {
    async fn identify(&self, request: &IdentificationRequest) -> ClassificationOutcome {
        let form = match Self::build_form(request) {
            Ok(form) => form,
            Err(message) => return ClassificationOutcome::NetworkError(message),
        };

        let result = self
            .client
            .client
            .post(self.client.identify_url())
            .query(&[("api-key", self.client.api_key.as_str())])
            .multipart(form)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return ClassificationOutcome::Timeout,
            Err(e) => return ClassificationOutcome::NetworkError(e.to_string()),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => outcome_from_response(status, body),
            Err(e) if e.is_timeout() => ClassificationOutcome::Timeout,
            Err(e) => ClassificationOutcome::NetworkError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_matches_when_results_are_present() {
        let body = r#"{
            "results": [
                {"score": 0.9, "species": {"scientificNameWithoutAuthor": "Quercus robur"}},
                {"score": 0.2, "species": {"scientificNameWithoutAuthor": "Quercus ilex"}}
            ]
        }"#;

        let outcome = outcome_from_response(200, body.to_string());

        let ClassificationOutcome::Matches(matches) = outcome else {
            panic!("expected matches, got {:?}", outcome);
        };
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].scientific_name, "Quercus robur");
        assert_eq!(matches[1].scientific_name, "Quercus ilex");
    }

    #[test]
    fn should_classify_empty_when_results_array_is_empty() {
        let outcome = outcome_from_response(200, r#"{"results": []}"#.to_string());

        assert_eq!(outcome, ClassificationOutcome::Empty);
    }

    #[test]
    fn should_classify_empty_when_results_key_is_missing() {
        let outcome = outcome_from_response(200, "{}".to_string());

        assert_eq!(outcome, ClassificationOutcome::Empty);
    }

    #[test]
    fn should_keep_error_body_verbatim_when_status_is_not_ok() {
        let outcome = outcome_from_response(403, "invalid api key".to_string());

        assert_eq!(
            outcome,
            ClassificationOutcome::ApiError {
                status: 403,
                body: "invalid api key".to_string(),
            }
        );
    }

    #[test]
    fn should_not_parse_error_bodies_even_when_they_look_like_json() {
        let outcome = outcome_from_response(500, r#"{"results": [{"score": 0.9}]}"#.to_string());

        assert!(matches!(
            outcome,
            ClassificationOutcome::ApiError { status: 500, .. }
        ));
    }

    #[test]
    fn should_treat_unparseable_ok_body_as_network_error() {
        let outcome = outcome_from_response(200, "<html>gateway</html>".to_string());

        assert!(matches!(outcome, ClassificationOutcome::NetworkError(_)));
    }
}
