// Board service - Use case for assembling the status board
use crate::application::clock::Clock;
use crate::application::status_provider::StatusProvider;
use crate::domain::board::StatusBoard;
use std::sync::Arc;

const BOARD_TITLE: &str = "GKE Production Monitor";
const BOARD_SUBTITLE: &str = "Real-time infrastructure telemetry";

/// Time format matching the original dashboard's locale time label
const LAST_SYNC_FORMAT: &str = "%-I:%M:%S %p";

#[derive(Clone)]
pub struct BoardService {
    provider: Arc<dyn StatusProvider>,
    clock: Arc<dyn Clock>,
}

impl BoardService {
    pub fn new(provider: Arc<dyn StatusProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { provider, clock }
    }

    /// Build the board. Each call restamps the "last sync" label from the
    /// clock; the entries themselves are never re-fetched from a live feed.
    pub async fn get_board(&self) -> anyhow::Result<StatusBoard> {
        let entries = self.provider.list_entries().await?;
        let last_updated_label = self.clock.now().format(LAST_SYNC_FORMAT).to_string();

        Ok(StatusBoard::new(
            BOARD_TITLE.to_string(),
            BOARD_SUBTITLE.to_string(),
            entries,
            last_updated_label,
        ))
    }
}
