pub mod app_config;
pub mod cors_config;
pub mod recommendation_config;
pub mod server_config;
