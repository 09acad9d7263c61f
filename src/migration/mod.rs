// ABOUTME: Route table migration module
// ABOUTME: Reads optional_loops and rebuilds one destination table per route name

pub mod destination;
pub mod migrator;
pub mod source;
pub mod table_name;

pub use migrator::{run, RunOutcome, RunSummary, TableReport};
pub use source::SOURCE_TABLE;
pub use table_name::TableName;
