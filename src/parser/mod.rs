pub mod document;
pub mod extract;
pub mod patterns;
pub mod rules;

use crate::plan::PlanRecord;
use rules::ExtractionRules;

/// Two-step pipeline: markup → DOM → plan record.
pub fn process_document(text: &str, rules: &ExtractionRules) -> PlanRecord {
    let document = document::parse_document(text);
    extract::extract_all(&document, rules)
}
