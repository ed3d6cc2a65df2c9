use serde::{Deserialize, Serialize};

/// Headline and optional summary of an article submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub headline: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl ArticleContent {
    pub fn new(headline: impl Into<String>, summary: Option<String>) -> Self {
        ArticleContent {
            headline: headline.into(),
            summary,
        }
    }

    /// `headline + " " + summary`, lower-cased.
    pub fn scoring_text(&self) -> String {
        format!(
            "{} {}",
            self.headline,
            self.summary.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

#[derive(Debug)]
pub(super) struct ContentContext {
    lower: String,
}

impl ContentContext {
    pub(super) fn new(content: &str) -> Self {
        Self {
            lower: content.to_lowercase(),
        }
    }

    pub(super) fn is_blank(&self) -> bool {
        self.lower.trim().is_empty()
    }

    pub(super) fn contains_keyword(&self, keyword: &str) -> bool {
        self.lower.contains(keyword)
    }

    pub(super) fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.contains_keyword(keyword))
    }
}
