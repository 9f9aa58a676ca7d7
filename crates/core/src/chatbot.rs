//! Rule-based chatbot keyword matcher.
//!
//! A rule maps a set of keywords to a canned response. Rules are tried in
//! ascending priority order (lower number wins); within a rule every keyword
//! is tested as a whole word against the lowercased, trimmed user input.
//! The first rule with any matching keyword answers. Nothing matching means
//! the fallback message is returned.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Priority given to newly created rules when none is supplied.
pub const DEFAULT_RULE_PRIORITY: i32 = 10;

/// Priority used for ordering when a stored rule has no priority at all.
pub const UNSET_PRIORITY_SORT_KEY: i32 = 100;

/// Response returned when no rule matches.
pub const DEFAULT_FALLBACK: &str = "I'm sorry, I didn't quite catch that. \
     Could you rephrase your question, or reach us directly through the contact page?";

/// Maximum number of keywords on a single rule.
pub const MAX_KEYWORDS_PER_RULE: usize = 50;

/// Maximum length of a single keyword in characters.
pub const MAX_KEYWORD_LENGTH: usize = 100;

/// Maximum length of a rule response in characters.
pub const MAX_RESPONSE_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Rule input
// ---------------------------------------------------------------------------

/// A keyword rule as seen by the matcher.
///
/// Borrowed from whatever the caller fetched (database rows, defaults), so
/// the matcher never owns or mutates the rule set.
#[derive(Debug, Clone, Copy)]
pub struct RuleRef<'a> {
    pub keywords: &'a [String],
    pub response: &'a str,
    pub priority: Option<i32>,
}

/// Outcome of a matching pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub response: String,
    /// `false` when the fallback answered.
    pub matched: bool,
}

// ---------------------------------------------------------------------------
// Keyword normalization
// ---------------------------------------------------------------------------

/// Normalize raw keywords to the stored form.
///
/// Lowercases and trims each keyword, drops empties and removes duplicates
/// while keeping the first occurrence's position.
pub fn normalize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for kw in raw {
        let kw = kw.as_ref().trim().to_lowercase();
        if kw.is_empty() || out.contains(&kw) {
            continue;
        }
        out.push(kw);
    }
    out
}

/// Validate an already-normalized keyword set.
pub fn validate_keywords(keywords: &[String]) -> Result<(), CoreError> {
    if keywords.is_empty() {
        return Err(CoreError::Validation(
            "A chatbot rule needs at least one non-empty keyword".to_string(),
        ));
    }
    if keywords.len() > MAX_KEYWORDS_PER_RULE {
        return Err(CoreError::Validation(format!(
            "Keyword count exceeds maximum of {MAX_KEYWORDS_PER_RULE} (got {})",
            keywords.len()
        )));
    }
    if let Some(long) = keywords
        .iter()
        .find(|k| k.chars().count() > MAX_KEYWORD_LENGTH)
    {
        return Err(CoreError::Validation(format!(
            "Keyword '{long}' exceeds maximum length of {MAX_KEYWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

struct CompiledRule {
    patterns: Vec<Regex>,
    response: String,
}

/// A rule set sorted and compiled once, answering any number of inputs.
pub struct Matcher {
    rules: Vec<CompiledRule>,
    fallback: String,
}

impl Matcher {
    /// Build a matcher over `rules`, using `fallback` when nothing matches.
    ///
    /// Rules are stably sorted by priority (missing priority sorts as
    /// [`UNSET_PRIORITY_SORT_KEY`]), so equal priorities keep the supplied
    /// order. Keywords that normalize to nothing are skipped.
    pub fn new<'a, I>(rules: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = RuleRef<'a>>,
    {
        let mut sorted: Vec<RuleRef<'a>> = rules.into_iter().collect();
        sorted.sort_by_key(|r| r.priority.unwrap_or(UNSET_PRIORITY_SORT_KEY));

        let rules = sorted
            .into_iter()
            .map(|rule| CompiledRule {
                patterns: normalize_keywords(rule.keywords)
                    .iter()
                    .filter_map(|kw| word_pattern(kw))
                    .collect(),
                response: rule.response.to_string(),
            })
            .collect();

        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Answer `input` with the first matching rule's response.
    pub fn respond(&self, input: &str) -> MatchOutcome {
        let text = input.trim().to_lowercase();
        if text.is_empty() {
            return self.fallback_outcome();
        }

        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|re| re.is_match(&text)))
            .map(|rule| MatchOutcome {
                response: rule.response.clone(),
                matched: true,
            })
            .unwrap_or_else(|| self.fallback_outcome())
    }

    /// Number of rules held, in matching order.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn fallback_outcome(&self) -> MatchOutcome {
        MatchOutcome {
            response: self.fallback.clone(),
            matched: false,
        }
    }
}

/// One-shot match of `input` against `rules` with the built-in fallback.
pub fn respond<'a, I>(input: &str, rules: I) -> String
where
    I: IntoIterator<Item = RuleRef<'a>>,
{
    Matcher::new(rules, DEFAULT_FALLBACK).respond(input).response
}

/// Compile `\b<keyword>\b`, case-insensitive, with the keyword escaped.
fn word_pattern(keyword: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
        .ok()
}
