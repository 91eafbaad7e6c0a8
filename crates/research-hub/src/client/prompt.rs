//! Chat-completion request construction.

use serde_json::{Value, json};

use crate::models::Paper;

/// Name of the structured-output schema.
pub const SCHEMA_NAME: &str = "paper_summary_response";

/// System message establishing the summarizer persona.
pub const SYSTEM_PROMPT: &str = "You are a research assistant specializing in creating concise, \
insightful summaries of academic papers. Focus on key findings, methodology, and implications. \
Identify 2-3 significant diagrams or figures that would be most helpful for understanding the paper.";

/// User message for `paper`. Missing optional sections become empty strings.
#[must_use]
pub fn user_prompt(paper: &Paper) -> String {
    format!(
        "Generate a comprehensive summary of the following research paper:\n\n\
         Title: {}\n\
         Authors: {}\n\
         Abstract: {}\n\
         Methodology: {}\n\
         Results: {}",
        paper.title,
        paper.author_names(),
        paper.abstract_text,
        paper.methodology.as_deref().unwrap_or_default(),
        paper.results.as_deref().unwrap_or_default(),
    )
}

/// JSON schema the completion must conform to.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A comprehensive yet concise summary of the research paper"
            },
            "key_points": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of 3-5 key points from the paper"
            },
            "important_diagram_descriptions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "importance": { "type": "string" }
                    }
                },
                "description": "Descriptions of 2-3 important diagrams or figures that should be highlighted"
            }
        },
        "required": ["summary", "key_points", "important_diagram_descriptions"]
    })
}

/// Full request body for a summary of `paper`.
#[must_use]
pub fn request_body(model: &str, temperature: f64, max_tokens: u32, paper: &Paper) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_prompt(paper) }
        ],
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": SCHEMA_NAME,
                "schema": response_schema()
            }
        },
        "temperature": temperature,
        "max_tokens": max_tokens
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_user_prompt_fills_missing_sections_with_empty() {
        let paper = catalog::search_papers().remove(1);
        let prompt = user_prompt(&paper);

        assert!(prompt.starts_with("Generate a comprehensive summary"));
        assert!(prompt.contains("Authors: Dr. James Liu, Prof. Anna Kowalski\n"));
        assert!(prompt.contains("\nMethodology: \n"));
        assert!(prompt.ends_with("Results: "));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("gpt-4o", 0.7, 1000, &catalog::showcase_paper());

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(body["response_format"]["json_schema"]["name"], SCHEMA_NAME);

        let required = body["response_format"]["json_schema"]["schema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 3);
    }
}
