//! AI summary payloads and results.

use serde::{Deserialize, Serialize};

/// Fallback narrative shown when generation fails.
pub const FALLBACK_SUMMARY: &str =
    "We encountered an error while generating the summary. Please try again later.";

/// Single key point shown when generation fails.
pub const FALLBACK_KEY_POINT: &str = "Error generating summary";

/// Schema-constrained completion content.
///
/// All three top-level fields are required; a payload missing any of them is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPayload {
    /// Narrative summary.
    pub summary: String,
    /// Key points, in order.
    pub key_points: Vec<String>,
    /// Diagrams the model considers worth highlighting.
    pub important_diagram_descriptions: Vec<DiagramDescription>,
}

/// A diagram the model asked to highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramDescription {
    /// Figure title as named by the model.
    pub title: String,
    /// What the figure shows.
    pub description: String,
    /// Why it matters.
    pub importance: String,
}

/// A diagram description bound to a local image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDiagram {
    /// Figure title as named by the model.
    pub title: String,
    /// What the figure shows.
    pub description: String,
    /// Why it matters.
    pub importance: String,
    /// Matched image reference; empty when no local diagrams exist.
    pub image_url: String,
    /// Matched figure kind, "Figure" when unmatched.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Rendered outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Narrative summary.
    pub summary: String,
    /// Key points, in order.
    pub key_points: Vec<String>,
    /// Resolved diagrams, in the model's order.
    pub diagrams: Vec<ResolvedDiagram>,
}

impl SummaryResult {
    /// Result rendered in place of a failed generation.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            summary: FALLBACK_SUMMARY.to_string(),
            key_points: vec![FALLBACK_KEY_POINT.to_string()],
            diagrams: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let result = SummaryResult::fallback();
        assert!(!result.summary.is_empty());
        assert_eq!(result.key_points.len(), 1);
        assert!(result.diagrams.is_empty());
    }

    #[test]
    fn test_payload_requires_top_level_fields() {
        let missing = serde_json::json!({"summary": "s", "key_points": []});
        assert!(serde_json::from_value::<SummaryPayload>(missing).is_err());

        let sparse = serde_json::json!({
            "summary": "s",
            "key_points": ["k"],
            "important_diagram_descriptions": [{"title": "Figure 1"}]
        });
        let payload: SummaryPayload = serde_json::from_value(sparse).unwrap();
        assert_eq!(payload.important_diagram_descriptions[0].title, "Figure 1");
        assert!(payload.important_diagram_descriptions[0].importance.is_empty());
    }
}
