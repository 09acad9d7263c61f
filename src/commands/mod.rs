// ABOUTME: Command implementations
// ABOUTME: Exports the migrate command run by the binary

pub mod migrate;

pub use migrate::migrate;
