use std::collections::HashSet;

pub const SECTION_ARTICLE: &str = "article";
pub const SECTION_MATCH: &str = "match";
pub const SECTION_SENTIMENT: &str = "sentiment";
pub const SECTION_CREDIBILITY: &str = "credibility";

/// Every section a report carries, in render order.
pub const KNOWN_SECTIONS: [&str; 4] = [
    SECTION_ARTICLE,
    SECTION_MATCH,
    SECTION_SENTIMENT,
    SECTION_CREDIBILITY,
];

// Which sections of a report are expanded to full detail, plus the raw-dump
// toggle. Built fresh per report request; never persisted and never derived
// from the result data.
#[derive(Debug, Clone, Default)]
pub struct SectionState {
    expanded: HashSet<String>,
    show_raw_json: bool,
}

impl SectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one section between summary and detail presentation
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expand exactly the known set; any stray ids are dropped
    pub fn expand_all(&mut self) {
        self.expanded = KNOWN_SECTIONS.iter().map(|id| id.to_string()).collect();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn set_show_raw_json(&mut self, show: bool) {
        self.show_raw_json = show;
    }

    pub fn show_raw_json(&self) -> bool {
        self.show_raw_json
    }
}
