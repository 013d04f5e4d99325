//! Per-section view builders
//!
//! Each builder turns one slice of a screening result into a renderable
//! section: badges, compact summary lines, and a detail body that is only
//! materialized when the section is expanded.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::report::{
    Allegation, CredibilityResult, MatchingResult, PersonMatch, ScreeningResult, SentimentAssessment,
    SentimentResult,
};
use crate::report::state::{
    SECTION_ARTICLE, SECTION_CREDIBILITY, SECTION_MATCH, SECTION_SENTIMENT,
};
use crate::report::style::{format_confidence, format_score, BadgeColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Light,
    Outline,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Badge {
    pub label: String,
    pub color: BadgeColor,
    pub variant: BadgeVariant,
}

impl Badge {
    fn light(label: impl Into<String>, color: BadgeColor) -> Self {
        Self {
            label: label.into(),
            color,
            variant: BadgeVariant::Light,
        }
    }

    fn outline(label: impl Into<String>, color: BadgeColor) -> Self {
        Self {
            label: label.into(),
            color,
            variant: BadgeVariant::Outline,
        }
    }
}

/// One name/value row in a detail grid.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

fn entry(label: &str, value: impl Into<String>) -> LabeledValue {
    LabeledValue {
        label: label.to_string(),
        value: value.into(),
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportSection {
    pub id: String,
    pub title: String,
    pub badges: Vec<Badge>,
    /// Compact lines shown while the section is collapsed.
    pub summary: Vec<String>,
    pub expanded: bool,
    /// Present only when the section is expanded.
    pub detail: Option<SectionDetail>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionDetail {
    Article(ArticleDetail),
    Match(MatchDetail),
    NoMatch(NoteDetail),
    Sentiment(SentimentDetail),
    NoAdverseContent(NoteDetail),
    Credibility(CredibilityDetail),
    NotAssessed(NoteDetail),
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleDetail {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatchDetail {
    pub signals: Vec<LabeledValue>,
    pub evidence_for: Vec<String>,
    pub evidence_against: Vec<String>,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoteDetail {
    pub note: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SentimentDetail {
    pub allegations: Vec<AllegationView>,
    pub tone: Vec<LabeledValue>,
    pub rationale: String,
    pub related_entities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AllegationView {
    pub category: String,
    pub severity: String,
    pub status: String,
    pub description: String,
    pub quotes: Vec<String>,
    pub subject_response: Option<String>,
    pub monetary_amount: Option<String>,
    pub timeframe: Option<String>,
    pub jurisdiction: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CredibilityDetail {
    pub signals: Vec<LabeledValue>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub red_flags: Vec<String>,
    pub rationale: String,
}

pub fn article_section(result: &ScreeningResult, expanded: bool) -> ReportSection {
    let article = &result.article;
    let mut badges = Vec::new();
    let mut summary = vec![article.title.clone(), article.url.to_string()];

    if let Some(credibility) = &result.article_credibility {
        let assessment = &credibility.assessment;
        badges.push(Badge::light(
            format!(
                "{} ({})",
                assessment.recommendation.label(),
                format_score(assessment.credibility_score)
            ),
            assessment.recommendation.color(),
        ));
        summary.push(assessment.rationale.clone());
    }

    ReportSection {
        id: SECTION_ARTICLE.to_string(),
        title: "Article".to_string(),
        badges,
        summary,
        expanded,
        detail: expanded.then(|| {
            SectionDetail::Article(ArticleDetail {
                content: article.content.clone(),
            })
        }),
    }
}

pub fn match_section(matching: &MatchingResult, expanded: bool) -> ReportSection {
    let (badges, summary, detail) = match &matching.primary_match {
        Some(primary) => {
            let color = primary.decision.color();
            let badges = vec![
                Badge::light(primary.decision.label(), color),
                Badge::outline(format_confidence(primary.confidence), color),
            ];

            let query_name = &matching.query_person.name;
            let mut summary = vec![format!("Query: {query_name}")];
            if primary.entity_name != *query_name {
                summary.push(format!("Article mentions: {}", primary.entity_name));
            }
            summary.push(primary.reasoning.clone());

            let detail = expanded.then(|| SectionDetail::Match(match_detail(primary)));
            (badges, summary, detail)
        }
        None => {
            let badges = vec![Badge::light("No Match", BadgeColor::Gray)];
            let summary = vec![matching.summary.clone()];
            let analysed = matching.entities_analysed.len();
            let detail = expanded.then(|| {
                SectionDetail::NoMatch(NoteDetail {
                    note: format!(
                        "No matching person found in the article. Analysed {analysed} entities."
                    ),
                })
            });
            (badges, summary, detail)
        }
    };

    ReportSection {
        id: SECTION_MATCH.to_string(),
        title: "Person Match".to_string(),
        badges,
        summary,
        expanded,
        detail,
    }
}

fn match_detail(primary: &PersonMatch) -> MatchDetail {
    let name = &primary.signals.name;
    MatchDetail {
        signals: vec![
            entry("Exact Match", name.exact_match.as_str()),
            entry("Fuzzy Similarity", format_confidence(name.fuzzy_similarity)),
            entry("Partial Match", name.partial_match.as_str()),
            entry("Nickname Match", name.nickname_match.as_str()),
        ],
        evidence_for: primary.evidence_for_match.clone(),
        evidence_against: primary.evidence_against_match.clone(),
        reasoning: primary.reasoning.clone(),
    }
}

pub fn sentiment_section(sentiment: Option<&SentimentResult>, expanded: bool) -> ReportSection {
    let assessment = sentiment.and_then(|s| s.assessments.first());

    let (badges, summary, detail) = match assessment {
        Some(assessment) => {
            let color = assessment.risk_category.color();
            let mut badges = vec![
                Badge::light(assessment.risk_category.label(), color),
                Badge::outline(format!("Risk: {}", format_score(assessment.risk_score)), color),
            ];
            if assessment.requires_manual_review {
                badges.push(Badge::light("Manual Review Required", BadgeColor::Orange));
            }

            let count = assessment.allegations.len();
            let mut summary = vec![if count == 1 {
                "1 Allegation Found".to_string()
            } else {
                format!("{count} Allegations Found")
            }];
            for allegation in assessment.allegations.iter().take(3) {
                summary.push(format!(
                    "{} ({} severity, {})",
                    display_category(allegation),
                    allegation.severity.as_str(),
                    allegation.status.as_str()
                ));
            }
            summary.push(assessment.rationale.clone());

            let detail = expanded.then(|| SectionDetail::Sentiment(sentiment_detail(assessment)));
            (badges, summary, detail)
        }
        None => {
            let badges = vec![Badge::light("No Adverse Content", BadgeColor::Green)];
            let summary =
                vec!["No adverse media content detected for the matched person.".to_string()];
            let detail = expanded.then(|| {
                SectionDetail::NoAdverseContent(NoteDetail {
                    note: "The article does not contain adverse allegations or risk indicators."
                        .to_string(),
                })
            });
            (badges, summary, detail)
        }
    };

    ReportSection {
        id: SECTION_SENTIMENT.to_string(),
        title: "Adverse Media Assessment".to_string(),
        badges,
        summary,
        expanded,
        detail,
    }
}

fn sentiment_detail(assessment: &SentimentAssessment) -> SentimentDetail {
    let tone = &assessment.tone_signals;
    SentimentDetail {
        allegations: assessment.allegations.iter().map(allegation_view).collect(),
        tone: vec![
            entry("Certainty", tone.certainty_level.as_str()),
            entry("Attribution", tone.attribution_quality.as_str()),
            entry(
                "Temporal",
                tone.temporal_context.map_or("N/A", |t| t.as_str()),
            ),
            entry("Hedging", yes_no(tone.hedging_language)),
            entry("Subject Denial", yes_no(tone.subject_denial)),
        ],
        rationale: assessment.rationale.clone(),
        related_entities: assessment.related_entities_mentioned.clone(),
    }
}

fn allegation_view(allegation: &Allegation) -> AllegationView {
    AllegationView {
        category: display_category(allegation),
        severity: allegation.severity.as_str().to_string(),
        status: allegation.status.as_str().to_string(),
        description: allegation.description.clone(),
        quotes: allegation
            .evidence_spans
            .iter()
            .map(|span| span.quote.clone())
            .collect(),
        subject_response: allegation.subject_response.clone(),
        monetary_amount: allegation.monetary_amount.clone(),
        timeframe: allegation.timeframe.clone(),
        jurisdiction: allegation.jurisdiction.clone(),
    }
}

pub fn credibility_section(
    credibility: Option<&CredibilityResult>,
    expanded: bool,
) -> ReportSection {
    let (badges, summary, detail) = match credibility {
        Some(credibility) => {
            let assessment = &credibility.assessment;
            let badges = vec![Badge::light(
                format!(
                    "{} ({})",
                    assessment.recommendation.label(),
                    format_score(assessment.credibility_score)
                ),
                assessment.recommendation.color(),
            )];
            let summary = vec![assessment.rationale.clone()];
            let detail = expanded.then(|| {
                SectionDetail::Credibility(CredibilityDetail {
                    signals: credibility_signal_entries(credibility),
                    strengths: assessment.key_strengths.clone(),
                    weaknesses: assessment.key_weaknesses.clone(),
                    red_flags: assessment.hard_red_flags.clone(),
                    rationale: assessment.rationale.clone(),
                })
            });
            (badges, summary, detail)
        }
        None => {
            let badges = vec![Badge::light("Not Assessed", BadgeColor::Gray)];
            let summary = vec!["Credibility analysis was not run for this article.".to_string()];
            let detail = expanded.then(|| {
                SectionDetail::NotAssessed(NoteDetail {
                    note: "The screening service did not produce a credibility assessment for this article."
                        .to_string(),
                })
            });
            (badges, summary, detail)
        }
    };

    ReportSection {
        id: SECTION_CREDIBILITY.to_string(),
        title: "Source Credibility".to_string(),
        badges,
        summary,
        expanded,
        detail,
    }
}

fn credibility_signal_entries(credibility: &CredibilityResult) -> Vec<LabeledValue> {
    let signals = &credibility.assessment.signals;
    let named = [
        ("has_attribution", signals.has_attribution),
        ("has_multiple_sources", signals.has_multiple_sources),
        (
            "distinguishes_fact_allegation",
            signals.distinguishes_fact_allegation,
        ),
        ("has_named_quotes", signals.has_named_quotes),
        ("has_balanced_coverage", signals.has_balanced_coverage),
        ("is_internally_consistent", signals.is_internally_consistent),
        ("has_technical_detail", signals.has_technical_detail),
        ("uses_hedging_language", signals.uses_hedging_language),
        ("has_sensational_language", signals.has_sensational_language),
        (
            "has_excessive_anonymous_sources",
            signals.has_excessive_anonymous_sources,
        ),
        (
            "lacks_substantiating_detail",
            signals.lacks_substantiating_detail,
        ),
        ("has_poor_grammar", signals.has_poor_grammar),
        (
            "has_conspiratorial_framing",
            signals.has_conspiratorial_framing,
        ),
        ("has_vague_institutions", signals.has_vague_institutions),
        ("has_meta_claims", signals.has_meta_claims),
        ("has_emotional_tone", signals.has_emotional_tone),
    ];

    named
        .into_iter()
        .map(|(name, value)| entry(&name.replace('_', " "), value.as_str()))
        .collect()
}

fn display_category(allegation: &Allegation) -> String {
    allegation.category.as_str().replace('_', " ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
