use scraper::Html;
use tracing::debug;

use crate::parser::document::{element_text, field_value, list_items};
use crate::parser::patterns::{classify_minutes, internet_allowance, ItemText};
use crate::parser::rules::ExtractionRules;

/// Plan fields read from scope blocks, before benefits are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanInfo {
    pub name: Option<String>,
    pub price: Option<String>,
    pub internet: Option<String>,
    pub minutes: Option<i64>,
}

/// Walk every scope block in document order. Later blocks overwrite
/// name/price unconditionally; internet/minutes are overwritten per matching item.
pub fn extract(document: &Html, rules: &ExtractionRules) -> PlanInfo {
    let mut info = PlanInfo::default();

    for (idx, scope) in document.select(&rules.scope).enumerate() {
        info.name = field_value(scope, &rules.name_field);
        info.price = field_value(scope, &rules.price_field);
        debug!(scope = idx, name = ?info.name, price = ?info.price, "scope block");

        let Some(list) = scope.select(&rules.list).next() else {
            continue;
        };

        for item in list_items(list) {
            let text = ItemText::new(&element_text(item));

            if let Some(token) = internet_allowance(&text, &rules.vocabulary) {
                debug!(scope = idx, %token, "internet allowance");
                info.internet = Some(token);
            }

            if let Some(minutes) = classify_minutes(&text, &rules.vocabulary).value() {
                debug!(scope = idx, minutes, "minutes allowance");
                info.minutes = Some(minutes);
            }
        }
    }

    info
}
