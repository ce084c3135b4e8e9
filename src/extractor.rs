//! Entry point: configure a source once, then call [`PlanExtractor::extract`].
//! Construction never touches the filesystem.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::error::{ExtractError, Result};
use crate::parser::{self, rules::ExtractionRules};
use crate::plan::PlanRecord;

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone)]
pub struct PlanExtractor {
    source: Source,
    rules: ExtractionRules,
}

impl PlanExtractor {
    /// Read the document from `path` on every [`extract`](Self::extract) call.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(PlanExtractor {
            source: Source::File(path.into()),
            rules: ExtractionRules::with_defaults()?,
        })
    }

    /// Extract from a document already held in memory.
    pub fn from_html(html: impl Into<String>) -> Result<Self> {
        Ok(PlanExtractor {
            source: Source::Inline(html.into()),
            rules: ExtractionRules::with_defaults()?,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let rules = ExtractionRules::new(&settings.selectors, settings.vocabulary.clone())?;
        Ok(Self::from_path(settings.source_path.clone())?.with_rules(rules))
    }

    pub fn with_rules(mut self, rules: ExtractionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Path of the source document, if it is file-backed.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.source {
            Source::File(path) => Some(path),
            Source::Inline(_) => None,
        }
    }

    pub fn load_document(&self) -> Result<Cow<'_, str>> {
        match &self.source {
            Source::File(path) => {
                debug!(path = %path.display(), "reading plan document");
                std::fs::read_to_string(path)
                    .map(Cow::Owned)
                    .map_err(|source| ExtractError::Read {
                        path: path.clone(),
                        source,
                    })
            }
            Source::Inline(html) => Ok(Cow::Borrowed(html.as_str())),
        }
    }

    pub fn extract(&self) -> Result<PlanRecord> {
        let text = self.load_document()?;
        Ok(parser::process_document(&text, &self.rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_file() {
        let plan = PlanExtractor::from_path("tests/fixtures/single_block.html")
            .unwrap()
            .extract()
            .unwrap();
        assert_eq!(plan.name.as_deref(), Some("Plan X"));
        assert_eq!(plan.minutes, Some(-1));
    }

    #[test]
    fn missing_file_fails_with_read_error() {
        let extractor = PlanExtractor::from_path("tests/fixtures/does_not_exist.html").unwrap();
        match extractor.extract() {
            Err(ExtractError::Read { path, source }) => {
                assert_eq!(path, PathBuf::from("tests/fixtures/does_not_exist.html"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn inline_document() {
        let extractor = PlanExtractor::from_html(
            r#"<div class="notMobile"><input name="plano" value="Inline"><ul><li>Internet 3GB</li></ul></div>"#,
        )
        .unwrap();
        assert_eq!(extractor.source_path(), None);
        let plan = extractor.extract().unwrap();
        assert_eq!(plan.name.as_deref(), Some("Inline"));
        assert_eq!(plan.internet.as_deref(), Some("3gb"));
        assert!(plan.benefits.contains(&"Internet 3GB".to_string()));
    }

    #[test]
    fn repeated_extractions_are_independent() {
        let extractor = PlanExtractor::from_path("tests/fixtures/two_blocks.html").unwrap();
        assert_eq!(extractor.extract().unwrap(), extractor.extract().unwrap());
    }

    #[test]
    fn settings_drive_source_and_selectors() {
        let settings = Settings::load(Some(Path::new("tests/fixtures/settings.toml"))).unwrap();
        let extractor = PlanExtractor::from_settings(&settings).unwrap();
        assert_eq!(
            extractor.source_path(),
            Some(Path::new("tests/fixtures/two_blocks.html"))
        );
        let plan = extractor.extract().unwrap();
        assert_eq!(plan.name.as_deref(), Some("Plan B"));
        assert_eq!(plan.internet.as_deref(), Some("20gb"));
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let selectors = crate::config::SelectorSettings {
            scope_class: "isMobile".to_string(),
            ..Default::default()
        };
        let rules = ExtractionRules::new(&selectors, Default::default()).unwrap();
        let plan = PlanExtractor::from_path("tests/fixtures/no_scope.html")
            .unwrap()
            .with_rules(rules)
            .extract()
            .unwrap();
        assert_eq!(plan.name.as_deref(), Some("Hidden plan"));
        assert_eq!(plan.internet.as_deref(), Some("99gb"));
        assert_eq!(plan.minutes, Some(-1));
    }
}
