pub mod interview_record;
pub mod schedule;
pub mod weight_config;
