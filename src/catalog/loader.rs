//! Catalog loading from JSON documents.
//!
//! The catalog is a JSON array of tool objects. Loading follows a partial
//! success model: records that fail to deserialize are logged and skipped,
//! and only a catalog in which every record fails is rejected.

use crate::catalog::types::ToolRecord;
use crate::error::{AppError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

/// Catalog compiled into the binary, used when no `CATALOG_PATH` is set.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/tools.json");

/// Parse a catalog from a JSON string.
///
/// # Errors
/// Returns `AppError::CatalogError` if the document is not a JSON array, or
/// if it is non-empty and none of its entries parse.
pub fn parse_catalog(json: &str) -> Result<Vec<ToolRecord>> {
    let document: Value = serde_json::from_str(json)?;
    parse_records(&document)
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Vec<ToolRecord>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AppError::CatalogError(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        ))
    })?;

    let records = parse_catalog(&contents)?;

    tracing::info!(
        path = %path.display(),
        tools = records.len(),
        "Catalog file loaded"
    );

    Ok(records)
}

/// Transform a JSON array into tool records, skipping malformed entries.
fn parse_records(document: &Value) -> Result<Vec<ToolRecord>> {
    let entries = document
        .as_array()
        .ok_or_else(|| AppError::CatalogError("Expected a JSON array of tools".into()))?;

    let mut records = Vec::with_capacity(entries.len());
    let mut seen_ids = HashSet::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<ToolRecord>(entry.clone()) {
            Ok(record) => {
                if !seen_ids.insert(record.id.clone()) {
                    tracing::warn!(
                        index = idx,
                        id = %record.id,
                        "Skipping tool with duplicate id"
                    );
                    continue;
                }
                records.push(record);
            }
            Err(e) => {
                tracing::warn!(
                    index = idx,
                    error = %e,
                    "Skipping malformed tool definition"
                );
            }
        }
    }

    if records.is_empty() && !entries.is_empty() {
        return Err(AppError::CatalogError(
            "All tool definitions failed to parse".into(),
        ));
    }

    tracing::debug!(
        total = entries.len(),
        parsed = records.len(),
        "Catalog parsing complete"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Category;
    use serde_json::json;

    fn tool_json(id: &str, category: &str) -> Value {
        json!({
            "id": id,
            "name": format!("Tool {}", id),
            "description": "A tool",
            "category": category,
            "pricing": "Free",
            "rating": 4.0,
            "url": "https://example.com"
        })
    }

    #[test]
    fn test_parse_valid_catalog() {
        let doc = json!([tool_json("a", "Coding"), tool_json("b", "Writing")]);
        let records = parse_catalog(&doc.to_string()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[1].category, Category::Writing);
    }

    #[test]
    fn test_parse_skips_malformed_record() {
        let doc = json!([
            tool_json("a", "Coding"),
            tool_json("b", "Astrology"),
            { "id": "c" }
        ]);
        let records = parse_catalog(&doc.to_string()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
    }

    #[test]
    fn test_parse_skips_duplicate_ids() {
        let doc = json!([tool_json("a", "Coding"), tool_json("a", "Writing")]);
        let records = parse_catalog(&doc.to_string()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Coding);
    }

    #[test]
    fn test_parse_all_malformed_is_error() {
        let doc = json!([{ "id": "x" }, { "name": "y" }]);
        assert!(parse_catalog(&doc.to_string()).is_err());
    }

    #[test]
    fn test_parse_non_array_is_error() {
        assert!(parse_catalog(r#"{"tools": []}"#).is_err());
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn test_empty_array_is_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_default_catalog_parses_completely() {
        let document: Value = serde_json::from_str(DEFAULT_CATALOG_JSON).unwrap();
        let records = parse_catalog(DEFAULT_CATALOG_JSON).unwrap();

        assert_eq!(records.len(), document.as_array().unwrap().len());
        assert!(records.iter().any(|r| r.trending));
        assert!(records.iter().any(|r| r.new));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = load_catalog_file(Path::new("/nonexistent/tools.json"));
        assert!(matches!(result, Err(AppError::CatalogError(_))));
    }
}
