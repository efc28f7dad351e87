//! Prompt construction for the narrative advisor.
//!
//! Figures are rendered with fixed precision so the model sees the same
//! numbers the summary reports.

use crate::domain::{BusinessProfile, Summary};

pub fn system_prompt() -> &'static str {
    "You are Henry, a practical business assistant for small businesses in Mozambique. \
     Be direct, concrete and focused on actions the owner can take this week."
}

fn figures_block(profile: &BusinessProfile, summary: &Summary, currency: &str) -> String {
    format!(
        "BUSINESS: {}\nSECTOR: {}\nLOCATION: {}\n\nFIGURES:\n\
         - Revenue: {:.2} {cur}\n- Costs: {:.2} {cur}\n- Net profit: {:.2} {cur}\n\
         - Margin: {:.1}%\n- Health: {}",
        profile.name,
        profile.sector,
        profile.location,
        summary.revenue,
        summary.costs,
        summary.net_profit,
        summary.margin,
        summary.health_band,
        cur = currency,
    )
}

/// User message asking for commentary on a summary.
pub fn narrate_prompt(profile: &BusinessProfile, summary: &Summary, currency: &str) -> String {
    format!(
        "Analyze this business.\n\n{}\n\nGive a short, practical analysis with concrete next steps.",
        figures_block(profile, summary, currency)
    )
}

/// User message for a free-form question, with optional business context.
pub fn question_prompt(
    question: &str,
    context: Option<(&BusinessProfile, &Summary)>,
    currency: &str,
) -> String {
    let context_block = match context {
        Some((profile, summary)) => figures_block(profile, summary, currency),
        None => "(no business data available)".to_string(),
    };
    format!(
        "BUSINESS DATA:\n{}\n\nQUESTION:\n{}\n\nAnswer with practical, finance-focused advice. \
         Use concrete examples where possible.",
        context_block,
        question.trim()
    )
}
