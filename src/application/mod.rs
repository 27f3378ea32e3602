// Application layer - Use cases and seams
pub mod board_service;
pub mod clock;
pub mod status_provider;
