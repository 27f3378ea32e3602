// Fixed status entries - the board is not wired to a live feed
use crate::application::status_provider::StatusProvider;
use crate::domain::status::{ServiceStatus, StatusEntry};
use async_trait::async_trait;

pub struct StaticStatusProvider;

#[async_trait]
impl StatusProvider for StaticStatusProvider {
    async fn list_entries(&self) -> anyhow::Result<Vec<StatusEntry>> {
        Ok(vec![
            StatusEntry::new("User Service".to_string(), ServiceStatus::Healthy, 24),
            StatusEntry::new("Payment Gateway".to_string(), ServiceStatus::Healthy, 115),
            StatusEntry::new("Notification Hub".to_string(), ServiceStatus::Healthy, 45),
        ])
    }
}
