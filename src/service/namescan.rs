//! Quick name presence scan
//!
//! Fetches a page and reports whether a name appears anywhere in its
//! visible text. This is a pre-screening convenience, not an analysis:
//! no entity extraction, no matching, just a case-insensitive substring
//! check over the rendered text.

use reqwest::Client;
use scraper::Html;
use serde::Serialize;
use url::Url;
use utoipa::ToSchema;

use crate::model::config::NameScanPolicy;

/// Elements whose text never renders and must not count as page text.
const EXCLUDED_ELEMENTS: [&str; 9] = [
    "title", "script", "style", "noscript", "iframe", "audio", "source", "img", "video",
];

#[derive(Debug, thiserror::Error)]
pub enum NameScanError {
    #[error("URL blocked by scan policy: {0}")]
    Blocked(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NameScanOutcome {
    /// Whether the name occurs in the page's visible text.
    pub matched: bool,
    /// Characters of visible text scanned.
    pub text_chars: usize,
}

/// Fetches pages and scans their visible text for a name
pub struct NameScanner {
    client: Client,
    policy: NameScanPolicy,
}

impl NameScanner {
    pub fn new(policy: NameScanPolicy) -> Self {
        Self {
            client: Client::builder()
                .user_agent("screening-gateway/1.0")
                .build()
                .unwrap_or_else(|_| Client::new()),
            policy,
        }
    }

    pub async fn scan(&self, url: &Url, name: &str) -> Result<NameScanOutcome, NameScanError> {
        if !self.policy.is_url_allowed(url) {
            tracing::warn!(url = %url, "Name scan blocked by policy");
            return Err(NameScanError::Blocked(url.to_string()));
        }

        tracing::debug!(url = %url, "Fetching page for name scan");
        let response = self.client.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(NameScanError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        let text = visible_text(&html);
        let matched = name_occurs(&text, name);

        tracing::debug!(url = %url, matched, chars = text.chars().count(), "Name scan complete");

        Ok(NameScanOutcome {
            matched,
            text_chars: text.chars().count(),
        })
    }
}

/// Case-insensitive substring check, the whole matching heuristic.
fn name_occurs(text: &str, name: &str) -> bool {
    text.to_lowercase().contains(&name.to_lowercase())
}

/// Extract the visible text of an HTML document.
///
/// Text nodes are concatenated with no separator inserted, so a name split
/// across inline elements ("Jo<span>hn</span>") still reads as one word.
/// Subtrees rooted at non-rendering elements are skipped entirely.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        if let Some(element) = node.value().as_element() {
            if EXCLUDED_ELEMENTS.contains(&element.name()) {
                continue;
            }
        } else if let Some(fragment) = node.value().as_text() {
            text.push_str(fragment);
        }

        // Reverse keeps document order on a LIFO stack
        for child in node.children().rev() {
            stack.push(child);
        }
    }

    text
}
