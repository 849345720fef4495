use std::sync::Arc;

use imaging::normalizer::ImageNormalizerPng;
use logger::TracingLogger;
use plantnet::client::PlantNetClient;
use plantnet::identifier::PlantClassifierPlantNet;

use business::application::identification::identify::IdentifyPlantUseCaseImpl;

use crate::config::plantnet_config::PlantNetConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub identification_api: crate::api::identification::routes::IdentificationApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let normalizer = Arc::new(ImageNormalizerPng::new());
        let plantnet_config = PlantNetConfig::from_env();
        let plantnet_client = PlantNetClient::new(plantnet_config.api_key);
        let classifier = Arc::new(PlantClassifierPlantNet::new(plantnet_client));

        // Identification use case
        let identify_use_case = Arc::new(IdentifyPlantUseCaseImpl {
            normalizer,
            classifier,
            logger,
        });

        let identification_api =
            crate::api::identification::routes::IdentificationApi::new(identify_use_case);

        Self {
            health_api,
            identification_api,
        }
    }
}
