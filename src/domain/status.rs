// Service status domain model

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

impl ServiceStatus {
    /// Badge text shown on the card
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "Healthy",
            ServiceStatus::Unhealthy => "Unhealthy",
        }
    }

    /// CSS class selecting the badge color: green for Healthy, red otherwise
    pub fn badge_class(&self) -> &'static str {
        match self {
            ServiceStatus::Healthy => "badge-healthy",
            ServiceStatus::Unhealthy => "badge-unhealthy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub title: String,
    pub status: ServiceStatus,
    pub latency_ms: u32,
}

impl StatusEntry {
    pub fn new(title: String, status: ServiceStatus, latency_ms: u32) -> Self {
        Self {
            title,
            status,
            latency_ms,
        }
    }
}
