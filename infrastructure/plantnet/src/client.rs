use reqwest::Client;

/// Single deadline covering connect and response for one identification call.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared PlantNet HTTP client configuration.
pub struct PlantNetClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl PlantNetClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: "https://my-api.plantnet.org/v2".to_string(),
        }
    }

    /// Returns the "identify all" endpoint URL.
    pub fn identify_url(&self) -> String {
        format!("{}/identify/all", self.base_url)
    }
}
