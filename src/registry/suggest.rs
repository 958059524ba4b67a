/// Fuzzy "did you mean" suggestions for unknown format names.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// Names from `candidates` that fuzzily match `query`, best score first.
#[must_use]
pub fn similar_names<'a>(candidates: impl Iterator<Item = &'a str>, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = candidates
        .filter_map(|name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (name, score))
        })
        .collect();

    // Stable sort keeps registration order among equal scores.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name.to_owned())
        .collect()
}
