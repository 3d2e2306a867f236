//! Example queries offered in the search box.

use rand::seq::SliceRandom;

pub const SEARCH_SUGGESTIONS: [&str; 10] = [
    "I want to create YouTube videos",
    "Help me write blog posts",
    "Generate images for social media",
    "Build a website faster",
    "Automate email marketing",
    "Create presentation slides",
    "Edit photos professionally",
    "Write better code",
    "Design a logo for my business",
    "Manage my tasks efficiently",
];

/// One suggestion chosen uniformly at random.
pub fn random_suggestion() -> &'static str {
    SEARCH_SUGGESTIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SEARCH_SUGGESTIONS[0])
}
