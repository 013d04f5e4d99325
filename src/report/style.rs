//! Classification-to-presentation mapping
//!
//! Pure lookups from the closed classification enums to display labels and
//! color tokens, plus score formatting. Total by exhaustive match: a value
//! that deserialized is a value these functions can render.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::report::{CredibilityRecommendation, MatchDecision, RiskCategory};

/// Color tokens carried on badges. The consuming UI maps tokens to styling;
/// the gateway only picks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Teal,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl BadgeColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Teal => "teal",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Gray => "gray",
        }
    }
}

impl MatchDecision {
    pub const fn label(self) -> &'static str {
        match self {
            MatchDecision::DefiniteMatch => "Definite Match",
            MatchDecision::ProbableMatch => "Probable Match",
            MatchDecision::PossibleMatch => "Possible Match",
            MatchDecision::Uncertain => "Uncertain",
            MatchDecision::NoMatch => "No Match",
        }
    }

    /// Less alarming from definite_match down to no_match.
    pub const fn color(self) -> BadgeColor {
        match self {
            MatchDecision::DefiniteMatch => BadgeColor::Green,
            MatchDecision::ProbableMatch => BadgeColor::Teal,
            MatchDecision::PossibleMatch => BadgeColor::Yellow,
            MatchDecision::Uncertain => BadgeColor::Orange,
            MatchDecision::NoMatch => BadgeColor::Gray,
        }
    }
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::HighRisk => "High Risk",
            RiskCategory::MediumRisk => "Medium Risk",
            RiskCategory::LowRisk => "Low Risk",
            RiskCategory::NoAdverseContent => "No Adverse Content",
        }
    }

    pub const fn color(self) -> BadgeColor {
        match self {
            RiskCategory::HighRisk => BadgeColor::Red,
            RiskCategory::MediumRisk => BadgeColor::Orange,
            RiskCategory::LowRisk => BadgeColor::Yellow,
            RiskCategory::NoAdverseContent => BadgeColor::Green,
        }
    }
}

impl CredibilityRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            CredibilityRecommendation::Reliable => "Reliable",
            CredibilityRecommendation::Questionable => "Questionable",
            CredibilityRecommendation::Unreliable => "Unreliable",
        }
    }

    pub const fn color(self) -> BadgeColor {
        match self {
            CredibilityRecommendation::Reliable => BadgeColor::Green,
            CredibilityRecommendation::Questionable => BadgeColor::Yellow,
            CredibilityRecommendation::Unreliable => BadgeColor::Red,
        }
    }
}

/// Render a [0, 1] fraction as an integer percentage.
///
/// Rounds half away from zero ("87.5" becomes "88%"), the convention the
/// browser UI used for confidence figures.
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// Render a [0, 1] score with exactly two decimal places.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}
