use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

// The screening service's result schema. Field names and enum values follow
// the wire format exactly; unknown enum values are rejected at
// deserialization rather than coerced, unknown extra fields are ignored.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub url: Url,
    pub title: String,
    pub content: String,
}

// The subject being screened, as understood by the service
// - name: the name exactly as submitted
// - normalised_name: lowercased/stripped form used for matching
// - possible_nicknames: expansions the service considered (e.g. Bob for Robert)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryPerson {
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub normalised_name: Option<String>,
    #[serde(default)]
    pub possible_nicknames: Vec<String>,
    #[serde(default)]
    pub birth_year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Credibility analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CredibilitySignal {
    Yes,
    No,
    Unsure,
}

impl CredibilitySignal {
    pub const fn as_str(self) -> &'static str {
        match self {
            CredibilitySignal::Yes => "yes",
            CredibilitySignal::No => "no",
            CredibilitySignal::Unsure => "unsure",
        }
    }
}

/// The 16 named signals the service scores an article against.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredibilitySignals {
    pub has_attribution: CredibilitySignal,
    pub has_multiple_sources: CredibilitySignal,
    pub distinguishes_fact_allegation: CredibilitySignal,
    pub has_named_quotes: CredibilitySignal,
    pub has_balanced_coverage: CredibilitySignal,
    pub is_internally_consistent: CredibilitySignal,
    pub has_technical_detail: CredibilitySignal,
    pub uses_hedging_language: CredibilitySignal,
    pub has_sensational_language: CredibilitySignal,
    pub has_excessive_anonymous_sources: CredibilitySignal,
    pub lacks_substantiating_detail: CredibilitySignal,
    pub has_poor_grammar: CredibilitySignal,
    pub has_conspiratorial_framing: CredibilitySignal,
    pub has_vague_institutions: CredibilitySignal,
    pub has_meta_claims: CredibilitySignal,
    pub has_emotional_tone: CredibilitySignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityRecommendation {
    Reliable,
    Questionable,
    Unreliable,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredibilityAssessment {
    pub signals: CredibilitySignals,
    pub credibility_score: f64,
    pub recommendation: CredibilityRecommendation,
    pub rationale: String,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub key_weaknesses: Vec<String>,
    #[serde(default)]
    pub hard_red_flags: Vec<String>,
}

// Processing metadata attached to each analysis stage. Informational only:
// the gateway relays it but never interprets it, so everything past the
// timestamp is tolerated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyserMetadata {
    pub processed_at: String,
    #[serde(default)]
    pub processing_time_seconds: Option<f64>,
    #[serde(default)]
    pub llm_provider: Option<String>,
    #[serde(default)]
    pub llm_model: Option<String>,
    #[serde(default)]
    pub analyser_version: Option<String>,
    #[serde(default)]
    pub prompt_version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CredibilityResult {
    pub assessment: CredibilityAssessment,
    pub metadata: AnalyserMetadata,
}

// ---------------------------------------------------------------------------
// Entity extraction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Employment {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub evidence_quote: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntityRelationship {
    pub related_entity_name: String,
    #[serde(default)]
    pub relationship_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evidence_quote: Option<String>,
}

// A person mention extracted from the article. Not rendered directly; the
// matching stage consumes these. The service emits age/birth_year/
// date_of_birth as free-form strings, not numbers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub employments: Vec<Employment>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub nationalities: Vec<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<EntityRelationship>,
    #[serde(default)]
    pub mention_sentences: Vec<String>,
    #[serde(default)]
    pub mention_count: u32,
    pub extraction_confidence: f64,
}

// ---------------------------------------------------------------------------
// Person matching
// ---------------------------------------------------------------------------

/// Ordered confidence scale, from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchDecision {
    DefiniteMatch,
    ProbableMatch,
    PossibleMatch,
    Uncertain,
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignalMatch {
    Match,
    NoMatch,
    Unknown,
}

impl SignalMatch {
    pub const fn as_str(self) -> &'static str {
        match self {
            SignalMatch::Match => "match",
            SignalMatch::NoMatch => "no_match",
            SignalMatch::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NameSignals {
    pub exact_match: SignalMatch,
    /// Similarity score in [0, 1], not a tri-state signal.
    pub fuzzy_similarity: f64,
    pub nickname_match: SignalMatch,
    pub partial_match: SignalMatch,
    pub title_stripped_match: SignalMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DemographicSignals {
    pub dob_exact_match: SignalMatch,
    pub birth_year_match: SignalMatch,
    #[serde(default)]
    pub age_discrepancy_years: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchSignals {
    pub name: NameSignals,
    pub demographics: DemographicSignals,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonMatch {
    pub entity_id: String,
    pub entity_name: String,
    pub decision: MatchDecision,
    pub confidence: f64,
    pub signals: MatchSignals,
    pub reasoning: String,
    #[serde(default)]
    pub evidence_for_match: Vec<String>,
    #[serde(default)]
    pub evidence_against_match: Vec<String>,
    #[serde(default)]
    pub is_primary_match: bool,
}

// Outcome of matching the query person against extracted entities
// - matches: all candidates the service scored, best first
// - primary_match: the single best candidate, or None when matches is empty
// - has_definite_match / has_any_match / requires_manual_review: flags the
//   service derives from the match list; display hints, never recomputed here
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchingResult {
    pub query_person: QueryPerson,
    #[serde(default)]
    pub entities_analysed: Vec<String>,
    #[serde(default)]
    pub matches: Vec<PersonMatch>,
    #[serde(default)]
    pub has_definite_match: bool,
    #[serde(default)]
    pub has_any_match: bool,
    #[serde(default)]
    pub requires_manual_review: bool,
    #[serde(default)]
    pub primary_match: Option<PersonMatch>,
    pub summary: String,
    pub metadata: AnalyserMetadata,
}

// ---------------------------------------------------------------------------
// Sentiment / allegation analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AllegationCategory {
    Criminal,
    MoneyLaundering,
    Corruption,
    Fraud,
    RegulatoryViolation,
    Litigation,
    Sanctions,
    Investigation,
    Scandal,
    ConflictOfInterest,
    AbuseOfPower,
    HumanRights,
    Environmental,
    Terrorism,
    Smuggling,
    IpTheft,
    Cybercrime,
    Negligence,
    Bankruptcy,
    ReputationalDamage,
    EthicalViolation,
}

impl AllegationCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            AllegationCategory::Criminal => "criminal",
            AllegationCategory::MoneyLaundering => "money_laundering",
            AllegationCategory::Corruption => "corruption",
            AllegationCategory::Fraud => "fraud",
            AllegationCategory::RegulatoryViolation => "regulatory_violation",
            AllegationCategory::Litigation => "litigation",
            AllegationCategory::Sanctions => "sanctions",
            AllegationCategory::Investigation => "investigation",
            AllegationCategory::Scandal => "scandal",
            AllegationCategory::ConflictOfInterest => "conflict_of_interest",
            AllegationCategory::AbuseOfPower => "abuse_of_power",
            AllegationCategory::HumanRights => "human_rights",
            AllegationCategory::Environmental => "environmental",
            AllegationCategory::Terrorism => "terrorism",
            AllegationCategory::Smuggling => "smuggling",
            AllegationCategory::IpTheft => "ip_theft",
            AllegationCategory::Cybercrime => "cybercrime",
            AllegationCategory::Negligence => "negligence",
            AllegationCategory::Bankruptcy => "bankruptcy",
            AllegationCategory::ReputationalDamage => "reputational_damage",
            AllegationCategory::EthicalViolation => "ethical_violation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AllegationStatus {
    Alleged,
    Investigated,
    Charged,
    Convicted,
    Acquitted,
    Dismissed,
}

impl AllegationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            AllegationStatus::Alleged => "alleged",
            AllegationStatus::Investigated => "investigated",
            AllegationStatus::Charged => "charged",
            AllegationStatus::Convicted => "convicted",
            AllegationStatus::Acquitted => "acquitted",
            AllegationStatus::Dismissed => "dismissed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AllegationSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AllegationSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            AllegationSeverity::Low => "low",
            AllegationSeverity::Medium => "medium",
            AllegationSeverity::High => "high",
            AllegationSeverity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvidenceSpan {
    pub quote: String,
    #[serde(default)]
    pub start_index: Option<i64>,
    #[serde(default)]
    pub end_index: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Allegation {
    pub category: AllegationCategory,
    pub description: String,
    pub status: AllegationStatus,
    pub severity: AllegationSeverity,
    #[serde(default)]
    pub monetary_amount: Option<String>,
    #[serde(default)]
    pub timeframe: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub evidence_spans: Vec<EvidenceSpan>,
    #[serde(default)]
    pub subject_response: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertaintyLevel {
    Definite,
    Probable,
    Alleged,
    Speculative,
}

impl CertaintyLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            CertaintyLevel::Definite => "definite",
            CertaintyLevel::Probable => "probable",
            CertaintyLevel::Alleged => "alleged",
            CertaintyLevel::Speculative => "speculative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttributionQuality {
    NamedSources,
    AnonymousSources,
    NoAttribution,
}

impl AttributionQuality {
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributionQuality::NamedSources => "named_sources",
            AttributionQuality::AnonymousSources => "anonymous_sources",
            AttributionQuality::NoAttribution => "no_attribution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TemporalContext {
    Recent,
    Ongoing,
    Historical,
}

impl TemporalContext {
    pub const fn as_str(self) -> &'static str {
        match self {
            TemporalContext::Recent => "recent",
            TemporalContext::Ongoing => "ongoing",
            TemporalContext::Historical => "historical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToneSignals {
    pub certainty_level: CertaintyLevel,
    #[serde(default)]
    pub hedging_language: bool,
    pub attribution_quality: AttributionQuality,
    #[serde(default)]
    pub temporal_context: Option<TemporalContext>,
    #[serde(default)]
    pub subject_denial: bool,
    #[serde(default)]
    pub contradictory_evidence: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SentimentPolarity {
    Adverse,
    Neutral,
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    HighRisk,
    MediumRisk,
    LowRisk,
    NoAdverseContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SentimentAssessment {
    pub entity_id: String,
    pub entity_name: String,
    #[serde(default)]
    pub allegations: Vec<Allegation>,
    pub tone_signals: ToneSignals,
    pub overall_polarity: SentimentPolarity,
    pub risk_score: f64,
    /// Derived by the service from risk_score; never reclassified here.
    pub risk_category: RiskCategory,
    #[serde(default)]
    pub related_entities_mentioned: Vec<String>,
    pub rationale: String,
    #[serde(default)]
    pub requires_manual_review: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SentimentResult {
    /// One assessment per analysed entity; the first is the primary one.
    #[serde(default)]
    pub assessments: Vec<SentimentAssessment>,
    pub metadata: AnalyserMetadata,
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

// One completed screening. Created once per screen or stored-result fetch,
// then immutable; sentiment is absent when no entity matched, credibility
// when that analysis was not run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScreeningResult {
    pub article: Article,
    #[serde(default)]
    pub article_credibility: Option<CredibilityResult>,
    pub query_person: QueryPerson,
    #[serde(default)]
    pub entities: Vec<Entity>,
    pub matching: MatchingResult,
    #[serde(default)]
    pub sentiment: Option<SentimentResult>,
}

/// One record in the stored-results index kept by the screening service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultSummary {
    pub id: String,
    pub display_name: String,
    pub person_name: String,
    pub article_url: Url,
    pub article_title: String,
    pub created_at: DateTime<Utc>,
    pub schema_version: String,
}
