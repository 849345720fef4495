use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identification::errors::IdentificationError;
use crate::domain::identification::model::IdentificationRequest;
use crate::domain::identification::report::{IdentificationOutcome, IdentificationReport};
use crate::domain::identification::services::{
    ClassificationOutcome, ImageNormalizerService, PlantClassifierService,
};
use crate::domain::identification::use_cases::identify::{
    IdentifyPlantParams, IdentifyPlantUseCase, MAX_RESULTS_LIMIT,
};
use crate::domain::logger::Logger;

pub struct IdentifyPlantUseCaseImpl {
    pub normalizer: Arc<dyn ImageNormalizerService>,
    pub classifier: Arc<dyn PlantClassifierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IdentifyPlantUseCase for IdentifyPlantUseCaseImpl {
    async fn execute(
        &self,
        params: IdentifyPlantParams,
    ) -> Result<IdentificationOutcome, IdentificationError> {
        if params.max_results == 0 || params.max_results > MAX_RESULTS_LIMIT {
            return Err(IdentificationError::InvalidMaxResults);
        }

        self.logger.info("Normalizing uploaded images");

        let primary = self
            .normalizer
            .normalize(&params.primary.bytes, params.primary.format)?;
        let secondary = match &params.secondary {
            Some(upload) => Some(self.normalizer.normalize(&upload.bytes, upload.format)?),
            None => None,
        };

        let request = IdentificationRequest::new(primary, secondary);
        self.logger.info(&format!(
            "Submitting {} image(s) to the classifier",
            request.images().len()
        ));

        let outcome = match self.classifier.identify(&request).await {
            ClassificationOutcome::Matches(matches) => {
                self.logger
                    .info(&format!("Classifier returned {} match(es)", matches.len()));
                let report =
                    IdentificationReport::compile(matches, params.max_results, params.show_details);
                IdentificationOutcome::Success(report)
            }
            ClassificationOutcome::Empty => {
                self.logger.info("Classifier returned no matches");
                IdentificationOutcome::Empty
            }
            ClassificationOutcome::ApiError { status, body } => {
                self.logger
                    .error(&format!("Classifier API error: status {}", status));
                IdentificationOutcome::ApiError { status, body }
            }
            ClassificationOutcome::NetworkError(message) => {
                self.logger
                    .error(&format!("Classifier network error: {}", message));
                IdentificationOutcome::NetworkError(message)
            }
            ClassificationOutcome::Timeout => {
                self.logger.error("Classifier request timed out");
                IdentificationOutcome::Timeout
            }
        };

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identification::confidence::ConfidenceBucket;
    use crate::domain::identification::errors::NormalizeError;
    use crate::domain::identification::model::{NormalizedImage, SpeciesMatch};
    use crate::domain::identification::services::ImageSourceFormat;
    use crate::domain::identification::use_cases::identify::UploadedImage;
    use mockall::mock;

    mock! {
        pub Normalizer {}

        impl ImageNormalizerService for Normalizer {
            fn normalize(
                &self,
                bytes: &[u8],
                format: ImageSourceFormat,
            ) -> Result<NormalizedImage, NormalizeError>;
        }
    }

    mock! {
        pub Classifier {}

        #[async_trait]
        impl PlantClassifierService for Classifier {
            async fn identify(&self, request: &IdentificationRequest) -> ClassificationOutcome;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn pixel_image() -> NormalizedImage {
        NormalizedImage {
            bytes: vec![0u8; 8],
            width: 1,
            height: 1,
        }
    }

    fn match_with_score(name: &str, score: f64) -> SpeciesMatch {
        SpeciesMatch {
            scientific_name: name.to_string(),
            common_names: vec![],
            family: "Fagaceae".to_string(),
            genus: "Quercus".to_string(),
            score,
        }
    }

    fn jpeg_upload() -> UploadedImage {
        UploadedImage {
            bytes: vec![0xFF, 0xD8, 0xFF],
            format: ImageSourceFormat::Jpeg,
        }
    }

    fn params(secondary: Option<UploadedImage>, max_results: usize) -> IdentifyPlantParams {
        IdentifyPlantParams {
            primary: jpeg_upload(),
            secondary,
            max_results,
            show_details: true,
        }
    }

    fn use_case(
        normalizer: MockNormalizer,
        classifier: MockClassifier,
    ) -> IdentifyPlantUseCaseImpl {
        IdentifyPlantUseCaseImpl {
            normalizer: Arc::new(normalizer),
            classifier: Arc::new(classifier),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_compile_report_when_classifier_returns_matches() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .times(1)
            .returning(|_, _| Ok(pixel_image()));

        let mut classifier = MockClassifier::new();
        classifier.expect_identify().returning(|_| {
            ClassificationOutcome::Matches(vec![
                match_with_score("Quercus robur", 0.91),
                match_with_score("Quercus petraea", 0.55),
                match_with_score("Quercus ilex", 0.20),
            ])
        });

        let result = use_case(normalizer, classifier)
            .execute(params(None, 2))
            .await;

        let outcome = result.unwrap();
        let IdentificationOutcome::Success(report) = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].confidence, ConfidenceBucket::High);
        assert_eq!(report.entries[1].confidence, ConfidenceBucket::Medium);
        assert_eq!(report.stats.unwrap().total_matches, 3);
    }

    #[tokio::test]
    async fn should_normalize_both_images_when_secondary_given() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .times(2)
            .returning(|_, _| Ok(pixel_image()));

        let mut classifier = MockClassifier::new();
        classifier
            .expect_identify()
            .withf(|request| request.images().len() == 2)
            .returning(|_| ClassificationOutcome::Empty);

        let result = use_case(normalizer, classifier)
            .execute(params(Some(jpeg_upload()), 5))
            .await;

        assert_eq!(result.unwrap(), IdentificationOutcome::Empty);
    }

    #[tokio::test]
    async fn should_return_empty_when_classifier_finds_no_matches() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .returning(|_, _| Ok(pixel_image()));

        let mut classifier = MockClassifier::new();
        classifier
            .expect_identify()
            .returning(|_| ClassificationOutcome::Empty);

        let result = use_case(normalizer, classifier)
            .execute(params(None, 5))
            .await;

        assert_eq!(result.unwrap(), IdentificationOutcome::Empty);
    }

    #[tokio::test]
    async fn should_preserve_status_and_body_when_api_errors() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .returning(|_, _| Ok(pixel_image()));

        let mut classifier = MockClassifier::new();
        classifier
            .expect_identify()
            .returning(|_| ClassificationOutcome::ApiError {
                status: 403,
                body: "invalid api key".to_string(),
            });

        let result = use_case(normalizer, classifier)
            .execute(params(None, 5))
            .await;

        assert_eq!(
            result.unwrap(),
            IdentificationOutcome::ApiError {
                status: 403,
                body: "invalid api key".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_keep_timeout_distinct_from_network_error() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .returning(|_, _| Ok(pixel_image()));

        let mut classifier = MockClassifier::new();
        classifier
            .expect_identify()
            .returning(|_| ClassificationOutcome::Timeout);

        let result = use_case(normalizer, classifier)
            .execute(params(None, 5))
            .await;

        let outcome = result.unwrap();
        assert_eq!(outcome, IdentificationOutcome::Timeout);
        assert!(!matches!(outcome, IdentificationOutcome::NetworkError(_)));
    }

    #[tokio::test]
    async fn should_fail_when_max_results_out_of_bounds() {
        for max_results in [0, MAX_RESULTS_LIMIT + 1] {
            let result = use_case(MockNormalizer::new(), MockClassifier::new())
                .execute(params(None, max_results))
                .await;

            assert_eq!(
                result.unwrap_err(),
                IdentificationError::InvalidMaxResults
            );
        }
    }

    #[tokio::test]
    async fn should_propagate_decode_error_when_image_is_invalid() {
        let mut normalizer = MockNormalizer::new();
        normalizer
            .expect_normalize()
            .returning(|_, _| Err(NormalizeError::Decode));

        let result = use_case(normalizer, MockClassifier::new())
            .execute(params(None, 5))
            .await;

        assert_eq!(
            result.unwrap_err(),
            IdentificationError::Normalize(NormalizeError::Decode)
        );
    }
}
