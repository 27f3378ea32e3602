// Infrastructure layer - Concrete adapters and configuration
pub mod config;
pub mod static_provider;
pub mod system_clock;
