pub mod records_provider;
pub mod schedule_aggregator;
pub mod weight_config_service;
