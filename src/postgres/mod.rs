// ABOUTME: PostgreSQL utilities module
// ABOUTME: Exports connection management

pub mod connection;

pub use connection::{connect, connect_with_config};
