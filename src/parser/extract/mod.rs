pub mod benefits;
pub mod info;

use scraper::Html;
use tracing::{info, warn};

use super::rules::ExtractionRules;
use crate::plan::PlanRecord;

pub fn extract_all(document: &Html, rules: &ExtractionRules) -> PlanRecord {
    if document.select(&rules.scope).next().is_none() {
        warn!("no scope blocks found; returning an empty plan");
    }

    let plan_info = info::extract(document, rules);
    let benefits = benefits::extract(document, rules);

    let plan = PlanRecord {
        name: plan_info.name,
        price: plan_info.price,
        internet: plan_info.internet,
        minutes: plan_info.minutes,
        benefits,
    };

    info!(
        name = ?plan.name,
        internet = ?plan.internet,
        minutes = ?plan.minutes,
        benefits = plan.benefits.len(),
        "plan extracted"
    );
    plan
}

// ── Tests ──
