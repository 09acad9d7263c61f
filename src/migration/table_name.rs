// ABOUTME: Validated destination table names derived from route names
// ABOUTME: Rejects names PostgreSQL would truncate, cannot store, or that hit the source table

use crate::migration::source::SOURCE_TABLE;
use crate::utils::{quote_identifier, sanitize_identifier};
use anyhow::{bail, Result};
use std::fmt;

/// PostgreSQL silently truncates identifiers beyond `NAMEDATALEN - 1` bytes
pub const MAX_IDENTIFIER_BYTES: usize = 63;

/// A route name that is safe to use as a destination table name
///
/// The name is kept verbatim. Case, spaces and punctuation survive because
/// the identifier is always quoted when it reaches SQL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            bail!("Route name is empty and cannot be used as a table name");
        }
        if name.contains('\0') {
            bail!(
                "Route name '{}' contains a NUL character",
                sanitize_identifier(name)
            );
        }
        if name.len() > MAX_IDENTIFIER_BYTES {
            bail!(
                "Route name '{}' is {} bytes long; PostgreSQL table names are limited to {} bytes",
                sanitize_identifier(name),
                name.len(),
                MAX_IDENTIFIER_BYTES
            );
        }
        if name == SOURCE_TABLE {
            bail!(
                "Route name '{}' collides with the source table and would drop it",
                SOURCE_TABLE
            );
        }

        Ok(Self(name.to_string()))
    }

    /// The raw table name, exactly as stored in `optional_loops.name`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name quoted for use in SQL text
    pub fn quoted(&self) -> String {
        quote_identifier(&self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", sanitize_identifier(&self.0))
    }
}

/// Validate every route name up front
///
/// Returns all problems at once so a single run reports every bad name.
pub fn parse_all(names: &[String]) -> Result<Vec<TableName>> {
    let mut tables = Vec::with_capacity(names.len());
    let mut problems = Vec::new();

    for name in names {
        match TableName::parse(name) {
            Ok(table) => tables.push(table),
            Err(e) => problems.push(e.to_string()),
        }
    }

    if !problems.is_empty() {
        bail!(
            "{} route name(s) cannot be used as table names; no tables were rebuilt:\n  - {}",
            problems.len(),
            problems.join("\n  - ")
        );
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_and_quoted_names() {
        for name in ["A", "loop_1", "Route 66", "évora", "it's", "a\"b"] {
            let table = TableName::parse(name).unwrap();
            assert_eq!(table.as_str(), name);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(TableName::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_nul() {
        let err = TableName::parse("bad\0name").unwrap_err();
        assert!(err.to_string().contains("NUL"));
    }

    #[test]
    fn test_parse_rejects_names_postgres_would_truncate() {
        assert!(TableName::parse(&"a".repeat(63)).is_ok());
        assert!(TableName::parse(&"a".repeat(64)).is_err());
        // 32 two-byte characters exceed the byte limit
        assert!(TableName::parse(&"é".repeat(32)).is_err());
    }

    #[test]
    fn test_parse_rejects_source_table() {
        let err = TableName::parse("optional_loops").unwrap_err();
        assert!(err.to_string().contains("source table"));
        // Quoted identifiers are case sensitive, so this is a different table
        assert!(TableName::parse("Optional_Loops").is_ok());
    }

    #[test]
    fn test_quoted() {
        assert_eq!(TableName::parse("B").unwrap().quoted(), "\"B\"");
        assert_eq!(TableName::parse("a\"b").unwrap().quoted(), "\"a\"\"b\"");
    }

    #[test]
    fn test_display_sanitizes() {
        let table = TableName::parse("line\nbreak").unwrap();
        assert_eq!(table.to_string(), "linebreak");
    }

    #[test]
    fn test_parse_all_reports_every_problem() {
        let names = vec![
            "A".to_string(),
            String::new(),
            "optional_loops".to_string(),
            "B".to_string(),
        ];
        let err = parse_all(&names).unwrap_err().to_string();
        assert!(err.starts_with("2 route name(s)"));
        assert!(err.contains("no tables were rebuilt"));
        assert!(err.contains("empty"));
        assert!(err.contains("source table"));
    }

    #[test]
    fn test_parse_all_rejects_long_multibyte_name_among_valid_ones() {
        // 40 characters fit VARCHAR(50) but take 80 bytes
        let names = vec!["B".to_string(), "é".repeat(40)];
        let err = parse_all(&names).unwrap_err().to_string();
        assert!(err.starts_with("1 route name(s)"));
        assert!(err.contains("80 bytes long"));
        assert!(err.contains("no tables were rebuilt"));
    }

    #[test]
    fn test_parse_all_keeps_order() {
        let names = vec!["B".to_string(), "A".to_string()];
        let tables = parse_all(&names).unwrap();
        let raw: Vec<&str> = tables.iter().map(TableName::as_str).collect();
        assert_eq!(raw, vec!["B", "A"]);
    }
}
