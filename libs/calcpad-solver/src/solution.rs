//! Structured solution returned by the solver

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Step-by-step answer to a natural-language problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSolution {
    /// The problem as restated by the model
    pub problem: String,
    /// Detailed explanation
    pub solution: String,
    #[serde(default)]
    pub steps: Vec<String>,
    /// Final numeric or concise answer
    pub final_result: String,
}

impl AiSolution {
    /// Parse the model's JSON text
    ///
    /// Tolerates a Markdown code fence around the object.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(strip_code_fence(text))?)
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence
    let body = body.split_once('\n').map_or(body, |(_, rest)| rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "problem": "What is 15% of 80?",
        "solution": "Multiply 80 by 0.15.",
        "steps": ["Convert 15% to 0.15", "0.15 * 80 = 12"],
        "finalResult": "12"
    }"#;

    #[test]
    fn test_from_json() {
        let solution = AiSolution::from_json(SAMPLE).unwrap();
        assert_eq!(solution.problem, "What is 15% of 80?");
        assert_eq!(solution.steps.len(), 2);
        assert_eq!(solution.final_result, "12");
    }

    #[test]
    fn test_from_fenced_json() {
        let fenced = format!("```json\n{}\n```", SAMPLE);
        let solution = AiSolution::from_json(&fenced).unwrap();
        assert_eq!(solution.final_result, "12");
    }

    #[test]
    fn test_missing_field_is_error() {
        let result = AiSolution::from_json(r#"{"problem": "x", "solution": "y"}"#);
        assert!(result.is_err());
    }
}
