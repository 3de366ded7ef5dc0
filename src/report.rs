//! Plain-text rendering of results for the headless commands.

use std::fmt::Write;

use strum::IntoEnumIterator;

use crate::scoring::{Assessment, Tier};
use crate::theme::UiText;
use crate::tiers::{self, TierProfile};

fn write_profile(out: &mut String, profile: &TierProfile) {
    let _ = writeln!(out, "{}", profile.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "What this means");
    let _ = writeln!(out, "  {}", profile.implications);
    let _ = writeln!(out);
    let _ = writeln!(out, "Key obligations");
    for (i, obligation) in profile.obligations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, obligation);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Timeline");
    let _ = writeln!(out, "  {}", profile.timeline);
    let _ = writeln!(out);
    let _ = writeln!(out, "Accountability");
    let _ = writeln!(out, "  {}", profile.accountability);
    let _ = writeln!(out);
    let _ = writeln!(out, "Positioning");
    let _ = writeln!(out, "  {}", profile.positioning);
}

/// Result text for a computed assessment
pub fn render_text(assessment: &Assessment) -> String {
    let profile = tiers::profile(assessment.tier);
    let mut out = String::new();
    let _ = writeln!(out, "{}", profile.label);
    let _ = writeln!(out, "Score: {}", assessment.breakdown);
    let _ = writeln!(out);
    write_profile(&mut out, profile);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", UiText::DISCLAIMER);
    out
}

/// Reference text for every tier, lowest exposure first
pub fn render_tiers() -> String {
    let mut out = String::new();
    for (i, tier) in Tier::iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", "-".repeat(72));
            let _ = writeln!(out);
        }
        let profile = tiers::profile(tier);
        let _ = writeln!(out, "{}", profile.label);
        write_profile(&mut out, profile);
    }
    out
}
