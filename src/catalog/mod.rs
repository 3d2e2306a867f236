//! The tool catalog: an immutable, in-memory collection of records.
//!
//! The catalog is supplied from outside the matching engine (embedded JSON
//! or a file) and is never mutated after loading.

pub mod loader;
pub mod types;

pub use loader::{load_catalog_file, parse_catalog, DEFAULT_CATALOG_JSON};
pub use types::{Category, CategorySummary, Pricing, ToolRecord};

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::path::Path;

/// Read-only collection of tool records in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<ToolRecord>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolRecord>) -> Self {
        Self { tools }
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        parse_catalog(DEFAULT_CATALOG_JSON).map(Self::new)
    }

    /// Load from `path` when given, falling back to the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => load_catalog_file(path).map(Self::new),
            None => Self::embedded(),
        }
    }

    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// One summary per category, in display order, with record counts.
    pub fn categories(&self) -> Vec<CategorySummary> {
        Category::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                description: category.description(),
                tool_count: self.tools.iter().filter(|t| t.category == category).count(),
            })
            .collect()
    }

    /// Hex SHA-256 over ids, names and descriptions in catalog order.
    ///
    /// Changes whenever a record is added, removed, reordered or re-described.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for tool in &self.tools {
            hasher.update(tool.id.as_bytes());
            hasher.update(b"|");
            hasher.update(tool.name.as_bytes());
            hasher.update(b"|");
            hasher.update(tool.description.as_bytes());
            hasher.update(b"\n");
        }

        let digest: [u8; 32] = hasher.finalize().into();
        digest.iter().fold(String::with_capacity(64), |mut out, byte| {
            let _ = write!(out, "{:02x}", byte);
            out
        })
    }
}
