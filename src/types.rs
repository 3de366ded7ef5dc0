//! Type-safe answer types for the questionnaire
//!
//! Every answer the wizard collects is a proper Rust enum with a canonical
//! lowercase string form, so parsing, display and JSON all agree and an
//! out-of-range value can never be stored.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A selectable answer for one of the single-choice steps.
///
/// Used by the UI to render option lists generically and by the CLI to
/// report the accepted values.
pub trait ChoiceOption: Copy + PartialEq + std::fmt::Display + IntoEnumIterator {
    /// Field name used in messages
    const FIELD: &'static str;

    /// Short label shown in option lists
    fn label(&self) -> &'static str;

    /// One-line explanation shown under the label
    fn hint(&self) -> &'static str;

    /// All options in display order
    fn options() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Comma-separated canonical values, e.g. `small, medium, large`
    fn expected_values() -> String {
        Self::iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Organization size, following the EU SME size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EntitySize {
    Small,
    Medium,
    Large,
}

impl ChoiceOption for EntitySize {
    const FIELD: &'static str = "entity size";

    fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::Small => "Fewer than 50 employees and under EUR 10M turnover",
            Self::Medium => "50 to 249 employees or EUR 10M to 50M turnover",
            Self::Large => "250 or more employees or over EUR 50M turnover",
        }
    }
}

/// How critical the services the organization provides are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ServiceSensitivity {
    Low,
    Medium,
    High,
}

impl ChoiceOption for ServiceSensitivity {
    const FIELD: &'static str = "service sensitivity";

    fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::Low => "Disruption would have little impact beyond your own customers",
            Self::Medium => "Disruption would affect other businesses or a regional market",
            Self::High => {
                "Energy, health, transport, finance, water, digital infrastructure \
                 or public administration"
            }
        }
    }
}

/// Self-reported maturity of security governance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GovernanceMaturity {
    None,
    Basic,
    Structured,
    Iso,
}

impl ChoiceOption for GovernanceMaturity {
    const FIELD: &'static str = "governance maturity";

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Basic => "Basic",
            Self::Structured => "Structured",
            Self::Iso => "ISO 27001",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::None => "No formal security policies or assigned responsibilities",
            Self::Basic => "Some written policies, handled ad hoc by IT",
            Self::Structured => "Documented ISMS with regular risk reviews",
            Self::Iso => "Certified (or audit-ready) ISO/IEC 27001 management system",
        }
    }
}

/// Digital infrastructure posture (step 3).
///
/// The four flags are independent and default to `false`; there is no
/// "unset" state, so an all-false answer is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Infrastructure {
    /// Critical workloads run on public cloud services
    pub cloud: bool,
    /// Multi-factor authentication is enforced
    pub mfa: bool,
    /// A documented incident response process exists
    pub incident_process: bool,
    /// Operations depend on third-party ICT suppliers
    pub supply_chain: bool,
}

/// Identifies one of the four infrastructure flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum InfrastructureFlag {
    Cloud,
    Mfa,
    IncidentProcess,
    SupplyChain,
}

impl InfrastructureFlag {
    /// Checkbox label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cloud => "We run critical workloads on public cloud services",
            Self::Mfa => "Multi-factor authentication is enforced for all staff",
            Self::IncidentProcess => "We have a documented incident response process",
            Self::SupplyChain => "We depend on third-party ICT suppliers for core operations",
        }
    }

    /// All flags in display order
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

impl Infrastructure {
    /// Read a single flag
    pub fn get(&self, flag: InfrastructureFlag) -> bool {
        match flag {
            InfrastructureFlag::Cloud => self.cloud,
            InfrastructureFlag::Mfa => self.mfa,
            InfrastructureFlag::IncidentProcess => self.incident_process,
            InfrastructureFlag::SupplyChain => self.supply_chain,
        }
    }

    /// Flip a single flag
    pub fn toggle(&mut self, flag: InfrastructureFlag) {
        let slot = match flag {
            InfrastructureFlag::Cloud => &mut self.cloud,
            InfrastructureFlag::Mfa => &mut self.mfa,
            InfrastructureFlag::IncidentProcess => &mut self.incident_process,
            InfrastructureFlag::SupplyChain => &mut self.supply_chain,
        };
        *slot = !*slot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_entity_size_parse_case_insensitive() {
        assert_eq!(EntitySize::from_str("large").unwrap(), EntitySize::Large);
        assert_eq!(EntitySize::from_str("Medium").unwrap(), EntitySize::Medium);
        assert!(EntitySize::from_str("huge").is_err());
    }

    #[test]
    fn test_governance_display_is_lowercase() {
        assert_eq!(GovernanceMaturity::Iso.to_string(), "iso");
        assert_eq!(GovernanceMaturity::Structured.to_string(), "structured");
    }

    #[test]
    fn test_expected_values() {
        assert_eq!(EntitySize::expected_values(), "small, medium, large");
        assert_eq!(
            GovernanceMaturity::expected_values(),
            "none, basic, structured, iso"
        );
    }

    #[test]
    fn test_infrastructure_defaults_to_false() {
        let infra = Infrastructure::default();
        for flag in InfrastructureFlag::all() {
            assert!(!infra.get(flag));
        }
    }

    #[test]
    fn test_infrastructure_toggle() {
        let mut infra = Infrastructure::default();
        infra.toggle(InfrastructureFlag::Mfa);
        assert!(infra.mfa);
        infra.toggle(InfrastructureFlag::Mfa);
        assert!(!infra.mfa);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&GovernanceMaturity::Iso).unwrap();
        assert_eq!(json, "\"iso\"");
        let parsed: ServiceSensitivity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, ServiceSensitivity::High);
    }
}
