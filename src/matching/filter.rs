//! Facet filtering.
//!
//! A [`FilterState`] is a conjunction of independent facets. Neutral facets
//! (`All`, a zero rating floor, trending off, empty text) place no
//! constraint, so the default state is the identity filter.

use crate::catalog::{Category, Pricing, ToolRecord};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Sentinel label that disables a facet.
pub const ALL_LABEL: &str = "All";

/// One enumerated facet selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet<T> {
    /// No constraint.
    All,
    /// Exact match on one value.
    Only(T),
    /// A label outside the enumeration. Matches nothing.
    Unrecognized(String),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
            Facet::Unrecognized(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T: FromStr> Facet<T> {
    /// Parse a facet label; `"All"` disables the facet and unknown labels
    /// become [`Facet::Unrecognized`].
    pub fn parse(label: &str) -> Self {
        if label == ALL_LABEL {
            return Facet::All;
        }
        match label.parse::<T>() {
            Ok(value) => Facet::Only(value),
            Err(_) => {
                tracing::debug!(label, "Unrecognized facet label");
                Facet::Unrecognized(label.to_string())
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_LABEL),
            Facet::Only(value) => write!(f, "{}", value),
            Facet::Unrecognized(label) => f.write_str(label),
        }
    }
}

impl<T: fmt::Display> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct FacetVisitor<T>(PhantomData<T>);

impl<'de, T: FromStr> Visitor<'de> for FacetVisitor<T> {
    type Value = Facet<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a facet label string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Facet::parse(value))
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Facet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FacetVisitor(PhantomData))
    }
}

/// The full set of user-selected facets for one query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub category: Facet<Category>,
    pub pricing: Facet<Pricing>,
    /// Inclusive rating floor; 0 places no constraint
    pub min_rating: f32,
    pub show_trending: bool,
    /// Case-insensitive substring over name, description, category and tags
    pub search_query: String,
}

impl FilterState {
    /// True when any facet other than the free-text query is non-neutral.
    pub fn is_active(&self) -> bool {
        !self.category.is_all()
            || !self.pricing.is_all()
            || self.min_rating > 0.0
            || self.show_trending
    }

    /// Whether `tool` satisfies every facet.
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        self.category.matches(&tool.category)
            && self.pricing.matches(&tool.pricing)
            && tool.rating >= self.min_rating
            && (!self.show_trending || tool.trending)
            && text_matches(tool, &self.search_query)
    }
}

fn text_matches(tool: &ToolRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let mut text = String::with_capacity(
        tool.name.len() + tool.description.len() + tool.tags.len() * 12 + 24,
    );
    text.push_str(&tool.name);
    text.push(' ');
    text.push_str(&tool.description);
    text.push(' ');
    text.push_str(tool.category.label());
    for tag in &tool.tags {
        text.push(' ');
        text.push_str(tag);
    }

    text.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the records that satisfy every facet of `filters`, preserving
/// their relative order.
pub fn apply<'a, I>(tools: I, filters: &FilterState) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    tools.into_iter().filter(|t| filters.matches(t)).collect()
}
