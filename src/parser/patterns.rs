//! Co-occurrence classifiers for plan list items.
//!
//! Each classifier is a conjunction of stem containment checks over the
//! lower-cased item text. Stems may appear anywhere and in any order.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Vocabulary;
use crate::plan::UNLIMITED_MINUTES;

static DATA_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+gb").unwrap());
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// What a single list item says about the minute allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutesMatch {
    Unlimited,
    /// Minutes phrase found; `None` when it carries no usable digit run.
    Count(Option<i64>),
    NoMatch,
}

impl MinutesMatch {
    pub fn value(self) -> Option<i64> {
        match self {
            MinutesMatch::Unlimited => Some(UNLIMITED_MINUTES),
            MinutesMatch::Count(n) => n,
            MinutesMatch::NoMatch => None,
        }
    }
}

/// Item text normalised once for all classifiers.
pub struct ItemText(String);

impl ItemText {
    pub fn new(raw: &str) -> Self {
        ItemText(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn mentions(&self, stems: &[String]) -> bool {
        stems.iter().any(|s| !s.is_empty() && self.0.contains(s.as_str()))
    }
}

/// Data allowance token (`"10gb"`) when the item talks about internet and
/// carries digits directly followed by `gb`.
pub fn internet_allowance(item: &ItemText, vocab: &Vocabulary) -> Option<String> {
    if !item.mentions(&vocab.internet) {
        return None;
    }
    DATA_TOKEN_RE.find(item.as_str()).map(|m| m.as_str().to_string())
}

pub fn is_unlimited_calling(item: &ItemText, vocab: &Vocabulary) -> bool {
    item.mentions(&vocab.unlimited) && item.mentions(&vocab.calling)
}

pub fn is_minutes_phrase(item: &ItemText, vocab: &Vocabulary) -> bool {
    item.mentions(&vocab.minutes) && item.mentions(&vocab.calling)
}

/// Unlimited calling wins over a numeric phrase in the same item.
pub fn classify_minutes(item: &ItemText, vocab: &Vocabulary) -> MinutesMatch {
    if is_unlimited_calling(item, vocab) {
        MinutesMatch::Unlimited
    } else if is_minutes_phrase(item, vocab) {
        let count = DIGITS_RE
            .find(item.as_str())
            .and_then(|m| m.as_str().parse::<i64>().ok());
        MinutesMatch::Count(count)
    } else {
        MinutesMatch::NoMatch
    }
}
