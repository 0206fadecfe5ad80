// Country safety advisory lookup
//
// The flow is: resolver -> (remote client | fallback table) -> cache mirror.
// Remote payloads pass through verbatim; fallback entries only carry the
// mandatory fields. The cache mirror lives in the store module.

pub mod client;
pub mod fallback;
pub mod resolver;

use serde::{Deserialize, Serialize};

/// A resolved safety advisory as shown to the user.
///
/// Field names mirror the advisory API wire format (camelCase), which is also
/// the format persisted in the cache mirror slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRecord {
    pub name: String,
    /// 1, 2 or 3; anything else (or absent) classifies as Unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory_state: Option<i64>,
    #[serde(default)]
    pub advisory_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisories: Option<RegionalAdvisories>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<ClimateInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthInfo>,
}

/// One categorised advisory paragraph (regional, climate or health).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorySection {
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalAdvisories {
    #[serde(default)]
    pub regional_advisories: Vec<AdvisorySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateInfo {
    #[serde(default)]
    pub climate_info: Vec<AdvisorySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    #[serde(default)]
    pub health_info: Vec<AdvisorySection>,
}

/// Display classification of an advisory state integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

impl RiskLevel {
    pub fn from_state(state: Option<i64>) -> Self {
        match state {
            Some(1) => RiskLevel::Low,
            Some(2) => RiskLevel::Moderate,
            Some(3) => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Unknown => "Unknown",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Moderate => "orange",
            RiskLevel::High => "red",
            RiskLevel::Unknown => "gray",
        }
    }
}

impl AdvisoryRecord {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_state(self.advisory_state)
    }
}
