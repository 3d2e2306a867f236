//! Type definitions for catalog records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of catalog categories.
///
/// Serialized as the human-readable label (e.g. `"Image Generation"`), which
/// is also the text matched by the scorer's category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Writing,
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    #[serde(rename = "Video Creation")]
    VideoCreation,
    Coding,
    Marketing,
    Productivity,
    Business,
    Education,
    Audio,
    Design,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 12] = [
        Category::Writing,
        Category::ImageGeneration,
        Category::VideoCreation,
        Category::Coding,
        Category::Marketing,
        Category::Productivity,
        Category::Business,
        Category::Education,
        Category::Audio,
        Category::Design,
        Category::DataAnalysis,
        Category::CustomerSupport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Writing => "Writing",
            Category::ImageGeneration => "Image Generation",
            Category::VideoCreation => "Video Creation",
            Category::Coding => "Coding",
            Category::Marketing => "Marketing",
            Category::Productivity => "Productivity",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Audio => "Audio",
            Category::Design => "Design",
            Category::DataAnalysis => "Data Analysis",
            Category::CustomerSupport => "Customer Support",
        }
    }

    /// Short blurb shown on the category grid.
    pub fn description(self) -> &'static str {
        match self {
            Category::Writing => "AI writing assistants, content creation, and copywriting tools",
            Category::ImageGeneration => "Create stunning visuals, artwork, and designs with AI",
            Category::VideoCreation => "Video editing, generation, and production tools",
            Category::Coding => "AI-powered development, code completion, and debugging",
            Category::Marketing => "Marketing automation, copywriting, and campaign tools",
            Category::Productivity => "Task management, automation, and workflow optimization",
            Category::Business => "CRM, analytics, and business intelligence solutions",
            Category::Education => "Learning platforms, tutoring, and educational tools",
            Category::Audio => "Voice generation, audio editing, and music creation",
            Category::Design => "Graphic design, UI/UX, and creative layout tools",
            Category::DataAnalysis => "Data visualization, spreadsheets, and insight generation",
            Category::CustomerSupport => "Chatbots, help desks, and support automation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Closed set of pricing tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pricing {
    Free,
    Paid,
    Freemium,
    #[serde(rename = "Free Trial")]
    FreeTrial,
}

impl Pricing {
    pub const ALL: [Pricing; 4] = [
        Pricing::Free,
        Pricing::Paid,
        Pricing::Freemium,
        Pricing::FreeTrial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pricing::Free => "Free",
            Pricing::Paid => "Paid",
            Pricing::Freemium => "Freemium",
            Pricing::FreeTrial => "Free Trial",
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pricing::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("unknown pricing '{}'", s))
    }
}

/// A single catalog entry.
///
/// Records are read-only once loaded. The matching engine borrows them and
/// only ever produces derived orderings or subsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    /// Stable identifier, used as a list key only
    pub id: String,

    pub name: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    pub category: Category,

    pub pricing: Pricing,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_details: Option<String>,

    /// Conventionally in [0.0, 5.0]
    pub rating: f32,

    /// Display only, never scored
    #[serde(default)]
    pub review_count: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,

    #[serde(default)]
    pub trending: bool,

    #[serde(default)]
    pub new: bool,

    #[serde(default)]
    pub verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Opaque destination, not interpreted
    pub url: String,
}

impl ToolRecord {
    /// Creates a record with the required fields; flags default to false.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        pricing: Pricing,
        rating: f32,
    ) -> Self {
        let id = id.into();
        Self {
            url: format!("https://example.com/{}", id),
            id,
            name: name.into(),
            description: description.into(),
            long_description: None,
            category,
            pricing,
            price_details: None,
            rating,
            review_count: 0,
            tags: Vec::new(),
            features: Vec::new(),
            trending: false,
            new: false,
            verified: false,
            logo: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        self.long_description = Some(text.into());
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn new_release(mut self) -> Self {
        self.new = true;
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }
}

/// Entry of the category grid: a category with its catalog headcount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub description: &'static str,
    pub tool_count: usize,
}
