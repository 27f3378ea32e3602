// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use crate::presentation::templates::{DashboardTemplate, SettingsTemplate};
use askama::Template;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Status board view at the root path
pub async fn show_dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let board = state.board_service.get_board().await?;
    let template = DashboardTemplate { board };
    Ok(Html(template.render()?))
}

/// Settings notice; also serves as the catch-all view for unknown paths
pub async fn show_settings() -> Result<Html<String>, AppError> {
    Ok(Html(SettingsTemplate.render()?))
}
