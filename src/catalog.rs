//! Candidate catalog
//!
//! The search input never ranks or fetches candidates itself. The catalog
//! plays the host's side of that contract: it owns the full candidate set and
//! answers each search with a ranked list.

mod catalog_host;

use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

pub use catalog_host::CatalogHost;

use crate::error::SearchError;
use crate::suggestion::Suggestion;

pub struct Catalog {
    entries: Vec<Suggestion>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(entries: Vec<Suggestion>) -> Self {
        Self {
            entries,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Load a JSON array of suggestions
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let entries: Vec<Suggestion> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// A small project-management data set for demos
    pub fn builtin() -> Self {
        let entries = [
            (1, "Team A", "team-a", "T"),
            (2, "Team B", "team-b", "T"),
            (3, "Project Alpha", "project-alpha", "P"),
            (4, "Project Beta", "project-beta", "P"),
            (5, "Roadmap 2025", "roadmap-2025", "R"),
            (6, "Sprint Planning", "sprint-planning", "S"),
            (7, "Sprint Review", "sprint-review", "S"),
            (8, "Release Checklist", "release-checklist", "R"),
            (9, "Unread notifications", "notifications:unread", "N"),
            (10, "Mentions", "notifications:mentions", "N"),
            (11, "Design System", "design-system", "P"),
            (12, "Backlog Grooming", "backlog-grooming", "S"),
        ]
        .into_iter()
        .map(|(id, label, value, icon)| Suggestion::new(id, label, value).with_icon(icon))
        .collect();

        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Candidates for `query`, best first.
    ///
    /// Empty query returns every entry in catalog order. Otherwise each
    /// whitespace-separated term must fuzzy-match the label or the value;
    /// ties keep catalog order.
    pub fn search(&self, query: &str) -> Vec<Suggestion> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return self.entries.clone();
        }

        let mut scored: Vec<(usize, i64)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let mut total: i64 = 0;
                for term in &terms {
                    let label_score = self.matcher.fuzzy_match(&entry.label, term);
                    let value_score = self.matcher.fuzzy_match(&entry.value, term);
                    total += label_score.max(value_score)?;
                }
                Some((idx, total))
            })
            .collect();

        // sort_by is stable, so equal scores stay in catalog order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .map(|(idx, _)| self.entries[idx].clone())
            .collect()
    }
}
