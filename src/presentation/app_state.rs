// Application state for HTTP handlers
use crate::application::board_service::BoardService;

#[derive(Clone)]
pub struct AppState {
    pub board_service: BoardService,
}
