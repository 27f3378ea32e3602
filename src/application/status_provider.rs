// Provider trait for the entries shown on the board
use crate::domain::status::StatusEntry;
use async_trait::async_trait;

#[async_trait]
pub trait StatusProvider: Send + Sync {
    /// List the entries to display, in board order
    async fn list_entries(&self) -> anyhow::Result<Vec<StatusEntry>>;
}
