use scraper::Selector;

use crate::config::{SelectorSettings, Vocabulary};
use crate::error::{ExtractError, Result};

/// Compiled selectors plus the vocabulary used to classify list items.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pub scope: Selector,
    pub name_field: Selector,
    pub price_field: Selector,
    pub list: Selector,
    pub vocabulary: Vocabulary,
}

impl ExtractionRules {
    pub fn new(selectors: &SelectorSettings, vocabulary: Vocabulary) -> Result<Self> {
        Ok(ExtractionRules {
            scope: compile(&class_selector(&selectors.scope_class)?)?,
            name_field: compile(&named_control(&selectors.name_field))?,
            price_field: compile(&named_control(&selectors.price_field))?,
            list: compile("ul")?,
            vocabulary: lowercase_stems(vocabulary),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&SelectorSettings::default(), Vocabulary::default())
    }
}

/// A single class name; whitespace or selector punctuation would silently change
/// what the selector means.
fn class_selector(class: &str) -> Result<String> {
    let valid = !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii());
    if !valid {
        return Err(ExtractError::Selector {
            selector: format!(".{}", class),
            reason: "scope class must be a single class name".to_string(),
        });
    }
    Ok(format!(".{}", class))
}

/// Item text is matched lower-cased, so stems must be too.
fn lowercase_stems(vocabulary: Vocabulary) -> Vocabulary {
    let lower = |stems: Vec<String>| -> Vec<String> {
        stems.into_iter().map(|s| s.to_lowercase()).collect()
    };
    Vocabulary {
        internet: lower(vocabulary.internet),
        unlimited: lower(vocabulary.unlimited),
        calling: lower(vocabulary.calling),
        minutes: lower(vocabulary.minutes),
    }
}

fn named_control(name: &str) -> String {
    format!(r#"[name="{}"]"#, name.replace('\\', r"\\").replace('"', r#"\""#))
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
