/// Database configuration and connection management
pub mod database;

/// Server bind address from environment variables
pub mod server;
