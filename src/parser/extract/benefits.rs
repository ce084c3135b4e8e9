use scraper::{ElementRef, Html};

use crate::parser::document::{element_text, list_items};
use crate::parser::rules::ExtractionRules;

/// Trimmed items of the last list (document order) lying inside any scope block.
pub fn extract(document: &Html, rules: &ExtractionRules) -> Vec<String> {
    let last_list = document
        .select(&rules.list)
        .filter(|list| inside_scope(*list, rules))
        .last();

    last_list
        .map(|list| {
            list_items(list)
                .map(|item| element_text(item).trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn inside_scope(el: ElementRef<'_>, rules: &ExtractionRules) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| rules.scope.matches(&ancestor))
}
