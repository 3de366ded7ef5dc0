//! Tier reference text
//!
//! Static, tier-keyed explanatory text shown on the result screen. The lookup
//! is an exhaustive `match`, so every tier is guaranteed an entry at compile
//! time. Obligation order is significant and is displayed as listed.

use serde::Serialize;

use crate::scoring::Tier;

/// Explanatory text bundle for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierProfile {
    pub label: &'static str,
    pub title: &'static str,
    pub implications: &'static str,
    pub obligations: &'static [&'static str],
    pub timeline: &'static str,
    pub accountability: &'static str,
    pub positioning: &'static str,
}

static LIMITED: TierProfile = TierProfile {
    label: "Tier 1 - Limited / Low exposure",
    title: "Limited exposure: most likely outside the direct scope of NIS2",
    implications: "Your answers point to an organization that is unlikely to be designated as an \
        essential or important entity. NIS2 will still reach you indirectly: customers in scope \
        are required to manage the security of their supply chain and will pass requirements \
        down to you through contracts and questionnaires.",
    obligations: &[
        "Confirm your sector and size classification against the NIS2 annexes",
        "Keep an up-to-date inventory of systems and the data they hold",
        "Enforce multi-factor authentication for remote and administrative access",
        "Maintain tested backups of business-critical data",
        "Prepare evidence of basic security hygiene for customer supply-chain reviews",
    ],
    timeline: "No regulatory deadline applies directly. Review your position annually or whenever \
        headcount, turnover or the services you offer change.",
    accountability: "Security remains a management responsibility, but there is no personal \
        liability regime for your leadership under NIS2.",
    positioning: "Treat baseline security as a commercial asset: being able to answer customer \
        security questionnaires quickly is a differentiator when your clients fall in scope.",
};

static IMPORTANT: TierProfile = TierProfile {
    label: "Tier 2 - Important / Medium exposure",
    title: "Important entity profile: NIS2 obligations likely apply",
    implications: "Your organization matches the profile of an important entity. Important \
        entities are subject to the full set of risk-management and reporting obligations, \
        supervised ex post: authorities act when there is evidence or indication of \
        non-compliance, typically after an incident.",
    obligations: &[
        "Register with the national competent authority",
        "Adopt a cybersecurity risk-management policy approved by management",
        "Implement incident handling and report significant incidents (24h early warning, 72h notification, 1 month final report)",
        "Ensure business continuity, backup management and crisis management",
        "Assess and manage supply-chain security with your ICT suppliers",
        "Use multi-factor authentication and secured communications where appropriate",
        "Train management bodies and staff in cybersecurity",
    ],
    timeline: "Obligations apply from the date national transposition law enters into force. \
        Plan for registration within the first months and a working incident reporting process \
        before the first supervisory review.",
    accountability: "Management bodies must approve and oversee the risk-management measures and \
        can be held liable for infringements. Fines can reach EUR 7M or 1.4% of worldwide annual \
        turnover, whichever is higher.",
    positioning: "Build a structured security programme now: a documented ISMS aligned with \
        ISO/IEC 27001 covers most NIS2 measures and turns compliance into something you can \
        demonstrate to customers and regulators.",
};

static CRITICAL: TierProfile = TierProfile {
    label: "Tier 3 - Critical / High exposure",
    title: "Essential entity profile: high NIS2 exposure",
    implications: "Your organization matches the profile of an essential entity. Essential \
        entities face the strictest regime: proactive ex ante supervision including on-site \
        inspections, security audits and information requests, even without a prior incident.",
    obligations: &[
        "Register with the national competent authority and keep registration data current",
        "Adopt a cybersecurity risk-management policy approved and overseen by management",
        "Run a 24/7-capable incident handling process and meet the 24h / 72h / 1 month reporting deadlines",
        "Ensure business continuity, backup management, disaster recovery and crisis management",
        "Manage supply-chain security, including contractual security requirements for ICT suppliers",
        "Apply vulnerability handling and disclosure in network and system acquisition and development",
        "Regularly assess the effectiveness of security measures through audits and testing",
        "Use cryptography, access control, asset management and multi-factor authentication",
        "Train management bodies and staff in cybersecurity on a regular basis",
    ],
    timeline: "Expect to be supervised from the date national transposition law enters into \
        force. Registration, an approved risk-management policy and incident reporting should be \
        in place immediately; a full gap assessment should be completed within the first quarter.",
    accountability: "Management bodies are personally accountable: they must approve the measures, \
        follow training and can be temporarily suspended from managerial functions for serious \
        infringements. Fines can reach EUR 10M or 2% of worldwide annual turnover, whichever is \
        higher.",
    positioning: "Treat NIS2 as a board-level programme: appoint an accountable executive, fund a \
        certified ISMS, and prepare audit-ready evidence so that supervision becomes a formality \
        rather than a disruption.",
};

/// Look up the text bundle for a tier.
pub fn profile(tier: Tier) -> &'static TierProfile {
    match tier {
        Tier::Limited => &LIMITED,
        Tier::Important => &IMPORTANT,
        Tier::Critical => &CRITICAL,
    }
}
