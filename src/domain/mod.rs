// Domain layer - Core value types
pub mod board;
pub mod status;
