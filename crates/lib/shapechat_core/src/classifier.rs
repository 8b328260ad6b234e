//! Keyword classifier: maps a free-text message to a response shape.
//!
//! Rules are evaluated in order and the first match wins, so a message
//! mentioning both "json" and "table" is a `json` request.

use crate::shape::Shape;

/// A classification rule: any keyword present selects `shape`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub shape: Shape,
}

/// Ordered rule table. Keywords are lowercase.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["json", "data"],
        shape: Shape::Json,
    },
    Rule {
        keywords: &["table", "list"],
        shape: Shape::Table,
    },
    Rule {
        keywords: &["log", "error"],
        shape: Shape::Log,
    },
    Rule {
        keywords: &["dashboard", "chart", "graph"],
        shape: Shape::Dashboard,
    },
    Rule {
        keywords: &["fail", "break"],
        shape: Shape::Error,
    },
];

/// Shape used when no rule matches.
pub const FALLBACK: Shape = Shape::Text;

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Classify a message using [`RULES`].
pub fn classify(message: &str) -> Shape {
    classify_with(RULES, message)
}

/// Classify a message against an arbitrary ordered rule table.
pub fn classify_with(rules: &[Rule], message: &str) -> Shape {
    let lowered = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(FALLBACK, |rule| rule.shape)
}
