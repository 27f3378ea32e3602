// Status board domain model
use super::status::StatusEntry;

#[derive(Debug, Clone)]
pub struct StatusBoard {
    pub title: String,
    pub subtitle: String,
    pub entries: Vec<StatusEntry>,
    pub last_updated_label: String,
}

impl StatusBoard {
    pub fn new(
        title: String,
        subtitle: String,
        entries: Vec<StatusEntry>,
        last_updated_label: String,
    ) -> Self {
        Self {
            title,
            subtitle,
            entries,
            last_updated_label,
        }
    }
}
