//! Weighted keyword scoring and ranking.
//!
//! Each query token is tested independently against five buckets of a
//! record's text. Buckets are additive, so a token found in the name is
//! also counted by the tag, category, description and catch-all buckets it
//! happens to hit.
//!
//! | bucket                                          | weight |
//! |-------------------------------------------------|--------|
//! | name                                            | 10     |
//! | any tag                                         | 7      |
//! | category label                                  | 5      |
//! | description                                     | 3      |
//! | name + description + category + tags + long text| 1      |
//!
//! After token accumulation a record gains `+2` if verified, `+1` if
//! trending, and `rating * 0.5` unconditionally. Only records with a final
//! score above zero are kept. Because the rating nudge is unconditional, a
//! record with no keyword overlap but a positive rating still qualifies.

use crate::catalog::ToolRecord;
use crate::matching::accessors::trending_subset;
use crate::matching::tokenize::tokenize;
use serde::Serialize;

pub const NAME_WEIGHT: f32 = 10.0;
pub const TAG_WEIGHT: f32 = 7.0;
pub const CATEGORY_WEIGHT: f32 = 5.0;
pub const DESCRIPTION_WEIGHT: f32 = 3.0;
pub const CATCH_ALL_WEIGHT: f32 = 1.0;

pub const VERIFIED_BOOST: f32 = 2.0;
pub const TRENDING_BOOST: f32 = 1.0;
pub const RATING_FACTOR: f32 = 0.5;

/// A record paired with its relevance score for one ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredTool<'a> {
    pub tool: &'a ToolRecord,
    pub score: f32,
}

/// Lower-cased text of one record, built once per ranking call.
struct FieldView {
    name: String,
    tags: Vec<String>,
    category: String,
    description: String,
    searchable: String,
}

impl FieldView {
    fn new(tool: &ToolRecord) -> Self {
        let name = tool.name.to_lowercase();
        let tags: Vec<String> = tool.tags.iter().map(|t| t.to_lowercase()).collect();
        let category = tool.category.label().to_lowercase();
        let description = tool.description.to_lowercase();

        let long_description = tool
            .long_description
            .as_deref()
            .unwrap_or("")
            .to_lowercase();

        let mut parts: Vec<&str> = Vec::with_capacity(tags.len() + 4);
        parts.push(&name);
        parts.push(&description);
        parts.push(&category);
        parts.extend(tags.iter().map(String::as_str));
        parts.push(&long_description);
        let searchable = parts.join(" ");

        Self {
            name,
            tags,
            category,
            description,
            searchable,
        }
    }

    fn token_score(&self, token: &str) -> f32 {
        let mut score = 0.0;
        if self.name.contains(token) {
            score += NAME_WEIGHT;
        }
        if self.tags.iter().any(|tag| tag.contains(token)) {
            score += TAG_WEIGHT;
        }
        if self.category.contains(token) {
            score += CATEGORY_WEIGHT;
        }
        if self.description.contains(token) {
            score += DESCRIPTION_WEIGHT;
        }
        if self.searchable.contains(token) {
            score += CATCH_ALL_WEIGHT;
        }
        score
    }
}

/// Final relevance score of `tool` for already-tokenized `tokens`.
///
/// Tokens are expected lower-cased, as produced by [`tokenize`].
pub fn score_tool(tokens: &[String], tool: &ToolRecord) -> f32 {
    let view = FieldView::new(tool);
    let mut score: f32 = tokens.iter().map(|token| view.token_score(token)).sum();

    if tool.verified {
        score += VERIFIED_BOOST;
    }
    if tool.trending {
        score += TRENDING_BOOST;
    }
    score + tool.rating * RATING_FACTOR
}

/// Score every record against `tokens`, keep positive scores, and return
/// the best `limit` in descending score order.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank_tokens<'a>(
    tokens: &[String],
    catalog: &'a [ToolRecord],
    limit: usize,
) -> Vec<ScoredTool<'a>> {
    let mut scored: Vec<ScoredTool<'a>> = catalog
        .iter()
        .map(|tool| ScoredTool {
            tool,
            score: score_tool(tokens, tool),
        })
        .filter(|candidate| candidate.score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);

    tracing::debug!(
        tokens = tokens.len(),
        catalog = catalog.len(),
        returned = scored.len(),
        "Ranking completed"
    );

    scored
}

/// Rank `catalog` against a free-text query, returning at most `limit`
/// records.
///
/// A query with no usable tokens (empty, whitespace, or only words of two
/// characters or fewer) returns the trending subset instead, ordered by
/// rating.
pub fn rank<'a>(query: &str, catalog: &'a [ToolRecord], limit: usize) -> Vec<&'a ToolRecord> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return trending_subset(catalog, limit);
    }

    rank_tokens(&tokens, catalog, limit)
        .into_iter()
        .map(|candidate| candidate.tool)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Pricing};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn code_genius() -> ToolRecord {
        ToolRecord::new(
            "code-genius",
            "CodeGenius",
            "Smart assistant for developers",
            Category::Coding,
            Pricing::Freemium,
            4.8,
        )
        .with_tags(["coding", "autocomplete"])
        .trending()
        .verified()
    }

    fn plain(id: &str, rating: f32) -> ToolRecord {
        ToolRecord::new(id, id, "nothing relevant", Category::Audio, Pricing::Free, rating)
    }

    #[test]
    fn test_name_match_hits_name_and_catch_all() {
        let tool = ToolRecord::new("x", "PhotoMagic", "", Category::Design, Pricing::Free, 0.0);
        assert!(approx(score_tool(&tokens(&["photo"]), &tool), 11.0));
    }

    #[test]
    fn test_buckets_are_additive() {
        // "writ" hits name, tag, category, description and catch-all
        let tool = ToolRecord::new(
            "w",
            "WriteBot",
            "Writes for you",
            Category::Writing,
            Pricing::Free,
            0.0,
        )
        .with_tags(["writing"]);

        assert!(approx(score_tool(&tokens(&["writ"]), &tool), 26.0));
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        let tool = ToolRecord::new("t", "Thing", "", Category::Audio, Pricing::Free, 0.0)
            .with_tags(["Podcast"]);
        assert!(approx(score_tool(&tokens(&["podcast"]), &tool), 8.0));
    }

    #[test]
    fn test_long_description_only_feeds_catch_all() {
        let tool = ToolRecord::new("t", "Thing", "", Category::Audio, Pricing::Free, 0.0)
            .with_long_description("Great for karaoke nights");
        assert!(approx(score_tool(&tokens(&["karaoke"]), &tool), 1.0));
    }

    #[test]
    fn test_boosts_apply_without_keyword_match() {
        let tool = code_genius();
        // verified 2 + trending 1 + 4.8 * 0.5
        assert!(approx(score_tool(&tokens(&["zzz"]), &tool), 5.4));
    }

    #[test]
    fn test_code_genius_scenario() {
        let tool = code_genius();
        let score = score_tool(&tokenize("help me write better code"), &tool);

        // "code": name +10, catch-all +1, plus 2 + 1 + 2.4
        // ("coding" does not contain "code", so the tag bucket stays empty)
        assert!(approx(score, 16.4));
        assert!(score >= 12.4);

        let rival = ToolRecord::new(
            "rival",
            "Rival",
            "Plain text",
            Category::Productivity,
            Pricing::Free,
            3.0,
        )
        .with_long_description("source code assistant");
        let catalog = vec![rival, tool];

        let ranked = rank("help me write better code", &catalog, 10);
        assert_eq!(ranked[0].id, "code-genius");
        assert_eq!(ranked[1].id, "rival");
        assert!(score_tool(&tokenize("help me write better code"), &catalog[0]) <= 2.5);
    }

    #[test]
    fn test_zero_score_records_are_dropped() {
        let catalog = vec![plain("zero", 0.0), plain("rated", 1.0)];
        let ranked = rank("unrelated", &catalog, 10);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "rated");
    }

    #[test]
    fn test_rating_alone_surfaces_irrelevant_tools() {
        let catalog = vec![plain("a", 4.0), plain("b", 2.0)];
        let ranked = rank("spreadsheet", &catalog, 10);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "a");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![plain("first", 3.0), plain("second", 3.0), plain("third", 3.0)];
        let ranked = rank("nothing", &catalog, 10);

        let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_nan_rated_records_are_dropped_without_panicking() {
        let mut catalog: Vec<ToolRecord> = (0..40)
            .map(|i| plain(&format!("t{}", i), (i % 9) as f32 * 0.5))
            .collect();
        catalog[5].rating = f32::NAN;
        catalog[23].rating = f32::NAN;

        let ranked = rank_tokens(&tokens(&["relevant"]), &catalog, 40);

        assert_eq!(ranked.len(), 38);
        assert!(ranked.iter().all(|c| c.tool.id != "t5" && c.tool.id != "t23"));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_respects_limit() {
        let catalog: Vec<ToolRecord> = (0..10).map(|i| plain(&format!("t{}", i), 3.0)).collect();

        assert_eq!(rank("relevant", &catalog, 4).len(), 4);
        assert_eq!(rank("relevant", &catalog, 50).len(), 10);
        assert!(rank("relevant", &catalog, 0).is_empty());
    }

    #[test]
    fn test_empty_query_returns_trending_by_rating() {
        let catalog = vec![
            plain("cold", 5.0),
            plain("warm", 3.0).trending(),
            plain("hot", 4.5).trending(),
        ];

        for query in ["", "   ", "ai to me"] {
            let ranked = rank(query, &catalog, 6);
            let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, vec!["hot", "warm"], "query {:?}", query);
        }
    }

    #[test]
    fn test_rank_tokens_reports_scores_in_descending_order() {
        let catalog = vec![plain("low", 1.0), code_genius(), plain("mid", 3.0)];
        let scored = rank_tokens(&tokens(&["coding"]), &catalog, 10);

        assert_eq!(scored[0].tool.id, "code-genius");
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
