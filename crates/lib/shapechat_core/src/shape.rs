//! Response shapes and the generated response envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural category of a generated response. Determines the content schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Text,
    Json,
    Table,
    Log,
    Dashboard,
    Error,
}

impl Shape {
    pub const ALL: &[Shape] = &[
        Shape::Text,
        Shape::Json,
        Shape::Table,
        Shape::Log,
        Shape::Dashboard,
        Shape::Error,
    ];

    /// Wire tag, as used in the `type` field of chat responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Text => "text",
            Shape::Json => "json",
            Shape::Table => "table",
            Shape::Log => "log",
            Shape::Dashboard => "dashboard",
            Shape::Error => "error",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shape tag plus content matching that shape's schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedResponse {
    #[serde(rename = "type")]
    pub shape: Shape,
    pub content: serde_json::Value,
}

impl ShapedResponse {
    pub fn new(shape: Shape, content: impl Into<serde_json::Value>) -> Self {
        Self {
            shape,
            content: content.into(),
        }
    }
}
