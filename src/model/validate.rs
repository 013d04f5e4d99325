//! Structural checks applied to screening results at the trust boundary
//!
//! Deserialization already rejects unknown enum values; this pass covers the
//! invariants the type system cannot express.

use crate::model::report::{MatchDecision, ScreeningResult};

/// Result of validating one screening result
#[derive(Debug)]
pub struct ScreeningValidationResult {
    /// Whether the result passed validation
    pub is_valid: bool,
    /// Violations that make the result untrustworthy
    pub errors: Vec<String>,
    /// Drift in service-derived fields; tolerated but logged
    pub warnings: Vec<String>,
}

impl ScreeningValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate a screening result received from the screening service
///
/// Checks:
/// 1. Every score declared to be in [0, 1] actually is (errors)
/// 2. At most one match is flagged as the primary match (error)
/// 3. primary_match agrees with the flagged entry in matches (warning)
/// 4. Derived flags agree with the match list they were derived from (warnings)
pub fn validate_screening_result(result: &ScreeningResult) -> ScreeningValidationResult {
    let mut report = ScreeningValidationResult::valid();

    for (i, entity) in result.entities.iter().enumerate() {
        check_unit_interval(
            entity.extraction_confidence,
            &format!("entities[{i}].extraction_confidence"),
            &mut report,
        );
    }

    let matching = &result.matching;
    for (i, candidate) in matching.matches.iter().enumerate() {
        check_unit_interval(
            candidate.confidence,
            &format!("matching.matches[{i}].confidence"),
            &mut report,
        );
        check_unit_interval(
            candidate.signals.name.fuzzy_similarity,
            &format!("matching.matches[{i}].signals.name.fuzzy_similarity"),
            &mut report,
        );
    }

    let flagged: Vec<&str> = matching
        .matches
        .iter()
        .filter(|m| m.is_primary_match)
        .map(|m| m.entity_id.as_str())
        .collect();
    if flagged.len() > 1 {
        report.add_error(format!(
            "{} matches are flagged is_primary_match; at most one is allowed",
            flagged.len()
        ));
    }

    match &matching.primary_match {
        Some(primary) => {
            check_unit_interval(primary.confidence, "matching.primary_match.confidence", &mut report);
            if matching.matches.is_empty() {
                report.add_warning(
                    "primary_match is set but the matches list is empty".to_string(),
                );
            } else if !flagged.is_empty() && !flagged.contains(&primary.entity_id.as_str()) {
                report.add_warning(format!(
                    "primary_match references entity '{}' but '{}' is flagged is_primary_match",
                    primary.entity_id, flagged[0]
                ));
            }
        }
        None => {
            if !flagged.is_empty() {
                report.add_warning(format!(
                    "entity '{}' is flagged is_primary_match but primary_match is null",
                    flagged[0]
                ));
            }
        }
    }

    if matching.has_any_match != !matching.matches.is_empty() {
        report.add_warning(format!(
            "has_any_match is {} but the matches list has {} entries",
            matching.has_any_match,
            matching.matches.len()
        ));
    }

    let definite = matching
        .matches
        .iter()
        .any(|m| m.decision == MatchDecision::DefiniteMatch);
    if matching.has_definite_match != definite {
        report.add_warning(format!(
            "has_definite_match is {} but the matches list {} a definite_match decision",
            matching.has_definite_match,
            if definite { "contains" } else { "does not contain" }
        ));
    }

    if let Some(credibility) = &result.article_credibility {
        check_unit_interval(
            credibility.assessment.credibility_score,
            "article_credibility.assessment.credibility_score",
            &mut report,
        );
    }

    if let Some(sentiment) = &result.sentiment {
        for (i, assessment) in sentiment.assessments.iter().enumerate() {
            check_unit_interval(
                assessment.risk_score,
                &format!("sentiment.assessments[{i}].risk_score"),
                &mut report,
            );
        }
    }

    report
}

/// Scores declared as fractions must stay in [0, 1]; NaN fails the check
fn check_unit_interval(value: f64, field: &str, report: &mut ScreeningValidationResult) {
    if !(0.0..=1.0).contains(&value) {
        report.add_error(format!("{field} is {value}, outside [0, 1]"));
    }
}
