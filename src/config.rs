//! Layered settings: built-in defaults, an optional TOML file, then `PLAN_*`
//! environment variables.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

pub const DEFAULT_SOURCE_PATH: &str = "assets/plano.html";
const DEFAULT_SETTINGS_FILE: &str = "plan_extractor";
const ENV_PREFIX: &str = "PLAN";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_path: PathBuf,
    pub selectors: SelectorSettings,
    pub vocabulary: Vocabulary,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            selectors: SelectorSettings::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

/// Names that locate the plan inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Class carried by every scope block.
    pub scope_class: String,
    /// `name` attribute of the control holding the plan name.
    pub name_field: String,
    /// `name` attribute of the control holding the price.
    pub price_field: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        SelectorSettings {
            scope_class: "notMobile".to_string(),
            name_field: "plano".to_string(),
            price_field: "plano-valor".to_string(),
        }
    }
}

/// Lower-case stems whose presence in a list item marks a concept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub internet: Vec<String>,
    pub unlimited: Vec<String>,
    pub calling: Vec<String>,
    pub minutes: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary {
            internet: stems(&["internet"]),
            unlimited: stems(&["unlimited", "ilimitad"]),
            calling: stems(&["call", "talk", "liga", "fal"]),
            minutes: stems(&["min"]),
        }
    }
}

fn stems(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

const LIST_KEYS: &[&str] = &[
    "vocabulary.internet",
    "vocabulary.unlimited",
    "vocabulary.calling",
    "vocabulary.minutes",
];

/// `PLAN_*` variables, `__` between nested keys. Vocabulary lists are comma separated.
fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

impl Settings {
    /// Load settings. `file` replaces the default `plan_extractor.toml` lookup and
    /// must exist when given.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_layers(file, environment())
    }

    fn load_layers(file: Option<&Path>, env: Environment) -> Result<Self> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file_source)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        debug!(?settings, "settings loaded");
        Ok(settings)
    }
}
