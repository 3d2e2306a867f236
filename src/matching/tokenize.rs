/// Tokens of this many characters or fewer carry no signal and are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Split a free-text query into lower-cased scoring tokens.
///
/// Whitespace-delimited; anything of `MIN_TOKEN_CHARS` characters or fewer
/// ("a", "me", "to") is discarded. An empty result means the query carries
/// no usable signal.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
