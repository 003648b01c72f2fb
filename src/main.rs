#![allow(non_snake_case)]

mod cli;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use interviewScheduler::clients::api_client::ApiClient;
use interviewScheduler::config::{ApiConfig, AppConfig, DEFAULT_BIND_ADDR};
use interviewScheduler::logging;
use interviewScheduler::runtime;
use interviewScheduler::service::records_provider::HttpRecordsProvider;
use interviewScheduler::service::schedule_aggregator::ScheduleAggregator;
use interviewScheduler::service::weight_config_service::WeightConfigService;
use tracing::error;

const DEFAULT_RUN_MODE: &str = "cli";

#[tokio::main]
async fn main() {
    logging::init();

    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_else(|e| {
            error!("Unable to read config file {}: {}", path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };

    let api_config = ApiConfig::from_app_config(&config);
    let client = match ApiClient::new(api_config) {
        Ok(client) => client,
        Err(e) => {
            error!("Unable to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let aggregator = ScheduleAggregator::new(Arc::new(HttpRecordsProvider::new(client.clone())));
    let weights = WeightConfigService::new(client);

    let run_mode = config
        .get_or_env("RUN_MODE")
        .unwrap_or(DEFAULT_RUN_MODE.to_string());
    if run_mode == "api" {
        let bind = config
            .get_or_env("BIND_ADDR")
            .unwrap_or(DEFAULT_BIND_ADDR.to_string());
        let addr: SocketAddr = match bind.parse() {
            Ok(addr) => addr,
            Err(e) => {
                error!("Invalid BIND_ADDR {}: {}", bind, e);
                std::process::exit(1);
            }
        };
        runtime::run_api(aggregator, weights, addr).await;
    } else if run_mode == "cli" {
        if let Err(e) = cli::cli(aggregator, weights).await {
            error!("{}", e);
            std::process::exit(1);
        }
    } else {
        println!("Invalid run mode {}", run_mode);
    }
}
