// ABOUTME: Identifier helpers shared by the migration steps
// ABOUTME: Provides SQL identifier quoting and display sanitization

/// Quote an identifier for direct inclusion in SQL text
///
/// Wraps the identifier in double quotes and doubles any embedded double
/// quote, so the name is used literally with its case preserved.
///
/// **Note**: Only identifiers go through here. Values are always bound as
/// query parameters.
///
/// # Examples
///
/// ```
/// # use route_tables::utils::quote_identifier;
/// assert_eq!(quote_identifier("route_a"), "\"route_a\"");
/// assert_eq!(quote_identifier("Route A"), "\"Route A\"");
/// assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Sanitize an identifier (table name, schema name, etc.) for display
///
/// Removes control characters and limits length to prevent log injection attacks
/// and ensure readable error messages.
///
/// **Note**: This is for display purposes only. Use [`quote_identifier`] when
/// building SQL.
///
/// # Examples
///
/// ```
/// # use route_tables::utils::sanitize_identifier;
/// assert_eq!(sanitize_identifier("normal_table"), "normal_table");
/// assert_eq!(sanitize_identifier("table\x00name"), "tablename");
/// assert_eq!(sanitize_identifier("table\nname"), "tablename");
///
/// // Length limit
/// let long_name = "a".repeat(200);
/// assert_eq!(sanitize_identifier(&long_name).len(), 100);
/// ```
pub fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_control())
        .take(100)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("A"), "\"A\"");
        assert_eq!(quote_identifier("loop 7"), "\"loop 7\"");
        assert_eq!(
            quote_identifier("x\"; DROP TABLE optional_loops; --"),
            "\"x\"\"; DROP TABLE optional_loops; --\""
        );
        assert_eq!(quote_identifier("\"\""), "\"\"\"\"\"\"");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("normal_table"), "normal_table");
        assert_eq!(sanitize_identifier("table\x00name"), "tablename");
        assert_eq!(sanitize_identifier("table\nname"), "tablename");

        let long_name = "a".repeat(200);
        assert_eq!(sanitize_identifier(&long_name).len(), 100);
    }
}
