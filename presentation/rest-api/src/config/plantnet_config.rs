/// Configuration for PlantNet API access.
pub struct PlantNetConfig {
    pub api_key: String,
}

impl PlantNetConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("PLANTNET_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .expect("PLANTNET_API_KEY environment variable must be set and non-empty");
        Self { api_key }
    }
}
