//! Shared builders for screening-result values used across test modules.

use url::Url;

use crate::model::report::*;

pub(crate) fn metadata() -> AnalyserMetadata {
    AnalyserMetadata {
        processed_at: "2024-05-01T10:00:00+00:00".to_string(),
        processing_time_seconds: Some(6.1),
        llm_provider: Some("openai".to_string()),
        llm_model: Some("gpt-4o".to_string()),
        analyser_version: Some("1.0.0".to_string()),
        prompt_version: Some("v3".to_string()),
    }
}

pub(crate) fn query_person(name: &str) -> QueryPerson {
    QueryPerson {
        name: name.to_string(),
        date_of_birth: None,
        normalised_name: Some(name.to_lowercase()),
        possible_nicknames: vec![],
        birth_year: Some(1980),
    }
}

pub(crate) fn primary_person_match(entity_name: &str) -> PersonMatch {
    PersonMatch {
        entity_id: "entity-1".to_string(),
        entity_name: entity_name.to_string(),
        decision: MatchDecision::DefiniteMatch,
        confidence: 0.93,
        signals: MatchSignals {
            name: NameSignals {
                exact_match: SignalMatch::Match,
                fuzzy_similarity: 0.98,
                nickname_match: SignalMatch::Unknown,
                partial_match: SignalMatch::Match,
                title_stripped_match: SignalMatch::Unknown,
            },
            demographics: DemographicSignals {
                dob_exact_match: SignalMatch::Unknown,
                birth_year_match: SignalMatch::Match,
                age_discrepancy_years: None,
            },
        },
        reasoning: "Name and birth year both agree with the query.".to_string(),
        evidence_for_match: vec!["Jane Doe, 44, was charged on Tuesday.".to_string()],
        evidence_against_match: vec![],
        is_primary_match: true,
    }
}

pub(crate) fn allegation(
    category: AllegationCategory,
    severity: AllegationSeverity,
    status: AllegationStatus,
) -> Allegation {
    Allegation {
        category,
        description: "Allegedly diverted company funds.".to_string(),
        status,
        severity,
        monetary_amount: Some("$2m".to_string()),
        timeframe: Some("2019-2021".to_string()),
        jurisdiction: Some("UK".to_string()),
        evidence_spans: vec![EvidenceSpan {
            quote: "prosecutors allege the funds were diverted".to_string(),
            start_index: Some(120),
            end_index: Some(162),
        }],
        subject_response: Some("Denies all wrongdoing.".to_string()),
    }
}

pub(crate) fn sentiment_assessment(allegations: Vec<Allegation>) -> SentimentAssessment {
    SentimentAssessment {
        entity_id: "entity-1".to_string(),
        entity_name: "Jane Doe".to_string(),
        allegations,
        tone_signals: ToneSignals {
            certainty_level: CertaintyLevel::Alleged,
            hedging_language: true,
            attribution_quality: AttributionQuality::NamedSources,
            temporal_context: Some(TemporalContext::Recent),
            subject_denial: true,
            contradictory_evidence: false,
        },
        overall_polarity: SentimentPolarity::Adverse,
        risk_score: 0.72,
        risk_category: RiskCategory::MediumRisk,
        related_entities_mentioned: vec!["Acme Corp".to_string()],
        rationale: "Named-source reporting of charged financial misconduct.".to_string(),
        requires_manual_review: true,
    }
}

pub(crate) fn all_signals(value: CredibilitySignal) -> CredibilitySignals {
    CredibilitySignals {
        has_attribution: value,
        has_multiple_sources: value,
        distinguishes_fact_allegation: value,
        has_named_quotes: value,
        has_balanced_coverage: value,
        is_internally_consistent: value,
        has_technical_detail: value,
        uses_hedging_language: value,
        has_sensational_language: value,
        has_excessive_anonymous_sources: value,
        lacks_substantiating_detail: value,
        has_poor_grammar: value,
        has_conspiratorial_framing: value,
        has_vague_institutions: value,
        has_meta_claims: value,
        has_emotional_tone: value,
    }
}

pub(crate) fn credibility_result() -> CredibilityResult {
    CredibilityResult {
        assessment: CredibilityAssessment {
            signals: all_signals(CredibilitySignal::Yes),
            credibility_score: 0.81,
            recommendation: CredibilityRecommendation::Reliable,
            rationale: "Attributed reporting with multiple named sources.".to_string(),
            key_strengths: vec!["Named sources".to_string()],
            key_weaknesses: vec!["Single outlet".to_string()],
            hard_red_flags: vec![],
        },
        metadata: metadata(),
    }
}

/// A full result: credibility assessed, one definite match, adverse sentiment.
pub(crate) fn matched_result() -> ScreeningResult {
    let primary = primary_person_match("Jane Doe");
    ScreeningResult {
        article: Article {
            url: Url::parse("https://news.example.com/fraud-story").unwrap(),
            title: "Executive charged in fraud probe".to_string(),
            content: "Jane Doe, 44, was charged on Tuesday.".to_string(),
        },
        article_credibility: Some(credibility_result()),
        query_person: query_person("Jane Doe"),
        entities: vec![],
        matching: MatchingResult {
            query_person: query_person("Jane Doe"),
            entities_analysed: vec!["Jane Doe".to_string(), "John Smith".to_string()],
            matches: vec![primary.clone()],
            has_definite_match: true,
            has_any_match: true,
            requires_manual_review: false,
            primary_match: Some(primary),
            summary: "Definite match: 'Jane Doe' matches 'Jane Doe' (confidence: 93%)".to_string(),
            metadata: metadata(),
        },
        sentiment: Some(SentimentResult {
            assessments: vec![sentiment_assessment(vec![allegation(
                AllegationCategory::Fraud,
                AllegationSeverity::High,
                AllegationStatus::Charged,
            )])],
            metadata: metadata(),
        }),
    }
}

/// No candidate matched; sentiment and credibility stages did not run.
pub(crate) fn unmatched_result() -> ScreeningResult {
    ScreeningResult {
        article: Article {
            url: Url::parse("https://news.example.com/market-update").unwrap(),
            title: "Quiet week on the exchange".to_string(),
            content: "Markets drifted sideways.".to_string(),
        },
        article_credibility: None,
        query_person: query_person("Jane Doe"),
        entities: vec![],
        matching: MatchingResult {
            query_person: query_person("Jane Doe"),
            entities_analysed: vec!["Alan Turing".to_string()],
            matches: vec![],
            has_definite_match: false,
            has_any_match: false,
            requires_manual_review: false,
            primary_match: None,
            summary: "No matches found for 'Jane Doe' in this article.".to_string(),
            metadata: metadata(),
        },
        sentiment: None,
    }
}

pub(crate) fn result_summary(id: &str) -> ResultSummary {
    ResultSummary {
        id: id.to_string(),
        display_name: "Jane Doe – Executive charged in fraud probe".to_string(),
        person_name: "Jane Doe".to_string(),
        article_url: Url::parse("https://news.example.com/fraud-story").unwrap(),
        article_title: "Executive charged in fraud probe".to_string(),
        created_at: chrono::Utc::now(),
        schema_version: "1.0".to_string(),
    }
}
