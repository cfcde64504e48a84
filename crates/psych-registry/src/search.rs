//! Token search index.
//!
//! Entries are indexed by the lowercase tokens of their names, aliases and
//! keywords. A query token matches an entry when it is a substring of any
//! of the entry's tokens, so `"panic"` finds `"panic"` and `"gad"` finds
//! `"gad"` but also `"gadolinium"`. Each entry scores one point per distinct
//! query token that matched it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Splits text into lowercase search tokens.
///
/// Any character that is not alphanumeric separates tokens. Empty tokens are
/// dropped and repeated tokens are kept only once, in first-seen order.
///
/// # Examples
///
/// ```
/// use psych_registry::tokenize;
///
/// assert_eq!(
///     tokenize("Post-Traumatic Stress (PTSD)"),
///     vec!["post", "traumatic", "stress", "ptsd"]
/// );
/// assert_eq!(tokenize("Panic panic PANIC"), vec!["panic"]);
/// assert!(tokenize("  -- ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Inverted index from token to entry positions.
///
/// Positions are whatever the owner uses to address its entries; the
/// registry uses indices into its entry list.
#[derive(Debug, Default, Clone)]
pub struct SearchIndex {
    /// Token -> ascending, unique entry positions.
    postings: BTreeMap<String, Vec<usize>>,
}

impl SearchIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes the tokens of `texts` under `position`.
    ///
    /// Positions must be inserted in ascending order.
    pub fn insert<'a, I>(&mut self, position: usize, texts: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens: BTreeSet<String> = texts.into_iter().flat_map(tokenize).collect();
        for token in tokens {
            let positions = self.postings.entry(token).or_default();
            debug_assert!(positions.last().map_or(true, |&last| last < position));
            positions.push(position);
        }
    }

    /// Returns the number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Returns true if nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Returns the positions indexed under exactly `token`.
    pub fn postings(&self, token: &str) -> &[usize] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Scores every entry matching `query`.
    ///
    /// Returns `(position, score)` pairs in ascending position order. An
    /// empty query, after tokenizing, matches nothing.
    pub fn score(&self, query: &str) -> Vec<(usize, usize)> {
        let mut scores: HashMap<usize, usize> = HashMap::new();

        for query_token in tokenize(query) {
            let matched: BTreeSet<usize> = self
                .postings
                .iter()
                .filter(|(token, _)| token.contains(query_token.as_str()))
                .flat_map(|(_, positions)| positions.iter().copied())
                .collect();

            for position in matched {
                *scores.entry(position).or_default() += 1;
            }
        }

        let mut scored: Vec<(usize, usize)> = scores.into_iter().collect();
        scored.sort_unstable_by_key(|&(position, _)| position);
        scored
    }
}
