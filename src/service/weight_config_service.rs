use tracing::{error, info, warn};

use crate::clients::api_client::ApiClient;
use crate::errors::FetchError;
use crate::models::weight_config::{UpdateWeightConfigRequest, WeightConfig};

/// Scoring weight presets kept by the backend. Unlike the schedule view,
/// failures here go back to the caller.
pub struct WeightConfigService {
    client: ApiClient,
}

impl WeightConfigService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn path(&self, suffix: &str) -> String {
        format!(
            "{}/{}",
            self.client.config().weight_config_path.trim_end_matches('/'),
            suffix
        )
    }

    pub async fn get_all(&self) -> Result<Vec<WeightConfig>, FetchError> {
        let path = self.path("all");
        info!("Fetching weight configs from {}", path);
        match self.client.get_json::<Vec<WeightConfig>>(&path).await {
            Ok(configs) => {
                info!("Fetched {} weight config(s)", configs.len());
                Ok(configs)
            }
            Err(e) => {
                error!("Failed to fetch weight configs: {}", e);
                Err(e)
            }
        }
    }

    pub async fn get_active(&self) -> Result<Option<WeightConfig>, FetchError> {
        let configs = self.get_all().await?;
        let active = find_active(&configs).cloned();
        match &active {
            Some(config) => info!("Active weight config is {}", config.weight_config_id),
            None => warn!("No active weight config"),
        }
        Ok(active)
    }

    pub async fn update(
        &self,
        config_id: i64,
        request: &UpdateWeightConfigRequest,
    ) -> Result<WeightConfig, FetchError> {
        info!(
            "Updating weight config {} (valid sum: {})",
            config_id, request.valid_weight_sum
        );
        let path = self.path(&config_id.to_string());
        match self.client.put_json::<_, WeightConfig>(&path, request).await {
            Ok(updated) => {
                info!("Updated weight config {}", updated.weight_config_id);
                Ok(updated)
            }
            Err(e) => {
                error!("Failed to update weight config {}: {}", config_id, e);
                Err(e)
            }
        }
    }
}

pub fn find_active(configs: &[WeightConfig]) -> Option<&WeightConfig> {
    configs.iter().find(|config| config.is_active)
}
