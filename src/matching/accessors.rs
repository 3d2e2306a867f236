//! Subset accessors over a tool collection.
//!
//! Every accessor orders its output with [`sort_by_rating_desc`], the same
//! primitive the scorer falls back to for an empty query.

use crate::catalog::{Category, ToolRecord};

/// Sort key for a rating; NaN ranks below every real rating.
fn rating_key(rating: f32) -> f32 {
    if rating.is_nan() {
        f32::NEG_INFINITY
    } else {
        rating
    }
}

/// Stable sort by descending rating; equal ratings keep their input order.
pub fn sort_by_rating_desc(tools: &mut [&ToolRecord]) {
    tools.sort_by(|a, b| rating_key(b.rating).total_cmp(&rating_key(a.rating)));
}

/// Filter with `keep`, order by rating, truncate to `limit`.
fn rated_subset<'a, I, F>(tools: I, keep: F, limit: Option<usize>) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
    F: Fn(&ToolRecord) -> bool,
{
    let mut subset: Vec<&ToolRecord> = tools.into_iter().filter(|t| keep(*t)).collect();
    sort_by_rating_desc(&mut subset);
    if let Some(limit) = limit {
        subset.truncate(limit);
    }
    subset
}

/// Trending tools, highest rated first, at most `limit`.
pub fn trending_subset<'a, I>(tools: I, limit: usize) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    rated_subset(tools, |t| t.trending, Some(limit))
}

/// Every tool in `category`, highest rated first. Never truncated.
pub fn category_subset<'a, I>(tools: I, category: Category) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    rated_subset(tools, |t| t.category == category, None)
}

/// Newly added tools, highest rated first, at most `limit`.
pub fn new_subset<'a, I>(tools: I, limit: usize) -> Vec<&'a ToolRecord>
where
    I: IntoIterator<Item = &'a ToolRecord>,
{
    rated_subset(tools, |t| t.new, Some(limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Pricing;

    fn tool(id: &str, category: Category, rating: f32) -> ToolRecord {
        ToolRecord::new(id, id, "", category, Pricing::Free, rating)
    }

    fn ids(tools: &[&ToolRecord]) -> Vec<String> {
        tools.iter().map(|t| t.id.clone()).collect()
    }

    fn catalog() -> Vec<ToolRecord> {
        vec![
            tool("a", Category::Coding, 4.1).trending(),
            tool("b", Category::Writing, 4.9).trending().new_release(),
            tool("c", Category::Coding, 4.5),
            tool("d", Category::Coding, 4.5).trending(),
            tool("e", Category::Audio, 4.5).trending().new_release(),
            tool("f", Category::Writing, 3.0).new_release(),
        ]
    }

    #[test]
    fn test_sort_by_rating_is_stable_on_ties() {
        let tools = catalog();
        let mut refs: Vec<&ToolRecord> = tools.iter().collect();
        sort_by_rating_desc(&mut refs);

        assert_eq!(ids(&refs), vec!["b", "c", "d", "e", "a", "f"]);
    }

    #[test]
    fn test_nan_ratings_sort_last_without_panicking() {
        let mut tools: Vec<ToolRecord> = (0..40)
            .map(|i| tool(&format!("t{}", i), Category::Coding, (i % 7) as f32 * 0.5).trending())
            .collect();
        tools[5].rating = f32::NAN;
        tools[23].rating = f32::NAN;

        let sorted = trending_subset(&tools, 40);

        assert_eq!(sorted.len(), 40);
        assert_eq!(ids(&sorted[38..]), vec!["t5", "t23"]);
        assert!(sorted[..38]
            .windows(2)
            .all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_trending_subset_sorted_and_truncated() {
        let tools = catalog();

        assert_eq!(ids(&trending_subset(&tools, 6)), vec!["b", "d", "e", "a"]);
        assert_eq!(ids(&trending_subset(&tools, 2)), vec!["b", "d"]);
        assert!(trending_subset(&tools, 0).is_empty());
    }

    #[test]
    fn test_trending_subset_is_deterministic() {
        let tools = catalog();
        assert_eq!(trending_subset(&tools, 6), trending_subset(&tools, 6));
    }

    #[test]
    fn test_category_subset_is_unbounded() {
        let mut tools = catalog();
        for i in 0..10 {
            tools.push(tool(&format!("x{}", i), Category::Coding, 2.0));
        }

        let coding = category_subset(&tools, Category::Coding);
        assert_eq!(coding.len(), 13);
        assert_eq!(ids(&coding[..3]), vec!["c", "d", "a"]);
        assert!(coding.iter().all(|t| t.category == Category::Coding));
    }

    #[test]
    fn test_category_subset_empty_category() {
        let tools = catalog();
        assert!(category_subset(&tools, Category::Education).is_empty());
    }

    #[test]
    fn test_new_subset() {
        let tools = catalog();
        assert_eq!(ids(&new_subset(&tools, 6)), vec!["b", "e", "f"]);
        assert_eq!(ids(&new_subset(&tools, 1)), vec!["b"]);
    }

    #[test]
    fn test_accessors_accept_borrowed_sequences() {
        let tools = catalog();
        let borrowed: Vec<&ToolRecord> = tools.iter().rev().collect();

        // "d" and "e" tie at 4.5; reversed input puts "e" first
        assert_eq!(ids(&trending_subset(borrowed, 3)), vec!["b", "e", "d"]);
    }
}
