//! Builds the configured CatalogueService

use std::sync::Arc;
use std::time::Duration;

use crate::application::errors::CatalogueError;
use crate::domain::traits::CatalogueService;
use crate::infrastructure::catalogue::{FakeCatalogueService, HttpCatalogueService, HttpCatalogueServiceOptions};
use crate::infrastructure::config::{CatalogueConfig, ServiceKind};

pub fn create_catalogue_service(config: &CatalogueConfig) -> Result<Arc<dyn CatalogueService>, CatalogueError> {
    let use_http = match config.service {
        ServiceKind::Fake => false,
        ServiceKind::Http => true,
        ServiceKind::Auto => config.base_url.is_some(),
    };

    if !use_http {
        tracing::info!("Using in-memory catalogue (seed data: {})", config.use_seed_data);
        let fake = if config.use_seed_data {
            FakeCatalogueService::with_seed_data()
        } else {
            FakeCatalogueService::default()
        };
        return Ok(Arc::new(fake));
    }

    tracing::info!(
        "Using HTTP catalogue at {}",
        config.base_url.as_deref().unwrap_or("<relative>")
    );
    let mut options = HttpCatalogueServiceOptions {
        base_url: config.base_url.clone(),
        headers: config.headers.clone(),
        ..Default::default()
    };
    if let Some(secs) = config.timeout_seconds {
        options = options.with_timeout(Duration::from_secs(secs));
    }
    Ok(Arc::new(HttpCatalogueService::new(options)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_without_url_is_fake() {
        let service = create_catalogue_service(&CatalogueConfig::default()).unwrap();
        let output = service.list_catalogue_items().await.unwrap();
        assert_eq!(output.total_count, 0);
    }

    #[tokio::test]
    async fn test_fake_with_seed_data() {
        let config = CatalogueConfig {
            service: ServiceKind::Fake,
            base_url: Some("https://ignored.example.test".into()),
            use_seed_data: true,
            ..Default::default()
        };
        let service = create_catalogue_service(&config).unwrap();
        let output = service.list_catalogue_items().await.unwrap();
        assert_eq!(output.total_count, 5);
    }

    #[tokio::test]
    async fn test_auto_with_url_is_http() {
        let config = CatalogueConfig {
            base_url: Some("http://127.0.0.1:9".into()),
            timeout_seconds: Some(2),
            ..Default::default()
        };
        let service = create_catalogue_service(&config).unwrap();

        // Nothing listens there, so only the HTTP variant can fail
        let err = service.list_catalogue_items().await.unwrap_err();
        assert!(matches!(err, CatalogueError::Network(_)), "{:?}", err);
    }

    #[test]
    fn test_http_without_url_still_builds() {
        let config = CatalogueConfig {
            service: ServiceKind::Http,
            timeout_seconds: Some(3),
            ..Default::default()
        };
        assert!(create_catalogue_service(&config).is_ok());
    }
}
