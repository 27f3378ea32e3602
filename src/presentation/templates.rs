// Askama templates for the two views
use crate::domain::board::StatusBoard;
use askama::Template;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub board: StatusBoard,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate;
