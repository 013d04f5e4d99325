//! Presentation derivation for screening results
//!
//! Pure over its inputs: one result plus one section state in, one
//! serializable view out. Nothing here talks to the network or recomputes
//! service-derived classifications.

pub mod sections;
pub mod state;
pub mod style;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::report::ScreeningResult;
use sections::ReportSection;

pub use sections::{
    AllegationView, ArticleDetail, Badge, BadgeVariant, CredibilityDetail, LabeledValue,
    MatchDetail, NoteDetail, SectionDetail, SentimentDetail,
};
pub use state::{
    SectionState, KNOWN_SECTIONS, SECTION_ARTICLE, SECTION_CREDIBILITY, SECTION_MATCH,
    SECTION_SENTIMENT,
};
pub use style::{format_confidence, format_score, BadgeColor};

/// The rendered form of one screening result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportView {
    /// Sections in fixed render order: article, match, sentiment, credibility.
    pub sections: Vec<ReportSection>,
    /// Verbatim pretty-printed result, when the raw view was requested.
    pub raw_json: Option<String>,
}

pub fn build_report(result: &ScreeningResult, state: &SectionState) -> ReportView {
    let sections = vec![
        sections::article_section(result, state.is_expanded(SECTION_ARTICLE)),
        sections::match_section(&result.matching, state.is_expanded(SECTION_MATCH)),
        sections::sentiment_section(result.sentiment.as_ref(), state.is_expanded(SECTION_SENTIMENT)),
        sections::credibility_section(
            result.article_credibility.as_ref(),
            state.is_expanded(SECTION_CREDIBILITY),
        ),
    ];

    let raw_json = if state.show_raw_json() {
        match serde_json::to_string_pretty(result) {
            Ok(raw) => Some(raw),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize result for the raw view");
                None
            }
        }
    } else {
        None
    };

    ReportView { sections, raw_json }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{matched_result, unmatched_result};

    #[test]
    fn test_sections_come_in_fixed_order() {
        let view = build_report(&matched_result(), &SectionState::new());

        let ids: Vec<&str> = view.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, KNOWN_SECTIONS);
    }

    #[test]
    fn test_expansion_state_drives_detail_presence() {
        let mut state = SectionState::new();
        state.toggle(SECTION_MATCH);

        let view = build_report(&matched_result(), &state);

        assert!(!view.sections[0].expanded);
        assert!(view.sections[0].detail.is_none());
        assert!(view.sections[1].expanded);
        assert!(view.sections[1].detail.is_some());
    }

    #[test]
    fn test_expand_all_materializes_every_detail() {
        let mut state = SectionState::new();
        state.expand_all();

        let view = build_report(&matched_result(), &state);
        assert!(view.sections.iter().all(|s| s.detail.is_some()));
    }

    #[test]
    fn test_raw_json_follows_toggle() {
        let result = matched_result();

        let plain = build_report(&result, &SectionState::new());
        assert!(plain.raw_json.is_none());

        let mut state = SectionState::new();
        state.set_show_raw_json(true);
        let raw = build_report(&result, &state);
        let dump = raw.raw_json.expect("raw dump requested");
        assert!(dump.contains("\"article\""));
        assert!(dump.contains("definite_match"));
    }

    #[test]
    fn test_unmatched_result_renders_without_panicking() {
        let mut state = SectionState::new();
        state.expand_all();
        state.set_show_raw_json(true);

        let view = build_report(&unmatched_result(), &state);

        assert_eq!(view.sections[1].badges[0].label, "No Match");
        assert_eq!(view.sections[2].badges[0].label, "No Adverse Content");
        assert_eq!(view.sections[3].badges[0].label, "Not Assessed");
    }
}
