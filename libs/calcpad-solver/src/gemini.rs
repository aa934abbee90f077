//! Gemini `generateContent` client
//!
//! Sends the problem with a JSON response schema and parses the first
//! candidate's text as an `AiSolution`. One request per call: no retry, no
//! streaming.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::solution::AiSolution;
use crate::ProblemSolver;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Build the instruction sent to the model
pub fn prompt(problem: &str) -> String {
    format!(
        "Solve this mathematical or logic problem: \"{}\". Provide a clear step-by-step solution.",
        problem
    )
}

/// Request body for `models/{model}:generateContent`
#[allow(clippy::disallowed_methods)] // json! macro internally uses unwrap (safe for known valid JSON)
pub fn build_request_body(problem: &str) -> Value {
    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt(problem) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "problem": { "type": "STRING" },
                    "solution": {
                        "type": "STRING",
                        "description": "Detailed explanation of the solution"
                    },
                    "steps": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "Numbered steps taken to reach the result"
                    },
                    "finalResult": {
                        "type": "STRING",
                        "description": "The final numeric or concise answer"
                    }
                },
                "required": ["problem", "solution", "steps", "finalResult"]
            }
        }
    })
}

/// Subset of the `generateContent` response we read
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Extract the solution from a decoded response
pub fn parse_generate_response(response: &GenerateContentResponse) -> Result<AiSolution> {
    let text = response.text().ok_or(SolverError::EmptyResponse)?;
    AiSolution::from_json(&text)
}

/// Gemini-backed problem solver
pub struct GeminiSolver {
    client: Client,
    config: SolverConfig,
}

impl GeminiSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl ProblemSolver for GeminiSolver {
    async fn solve(&self, problem: &str) -> Result<AiSolution> {
        let problem = problem.trim();
        if problem.is_empty() {
            return Err(SolverError::EmptyProblem);
        }
        let api_key = self.config.api_key().ok_or(SolverError::MissingApiKey)?;

        debug!(model = %self.config.model, chars = problem.len(), "requesting solution");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_request_body(problem))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "solver request failed");
            return Err(SolverError::status(status.as_u16(), body));
        }

        let payload: GenerateContentResponse = response.json().await?;
        let solution = parse_generate_response(&payload)?;
        debug!(steps = solution.steps.len(), "solution received");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let solver = GeminiSolver::new(SolverConfig {
            base_url: "http://localhost:8080/".to_string(),
            model: "test-model".to_string(),
            ..SolverConfig::default()
        })
        .unwrap();
        assert_eq!(
            solver.endpoint(),
            "http://localhost:8080/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_prompt_quotes_problem() {
        assert_eq!(
            prompt("2 apples + 3 apples"),
            "Solve this mathematical or logic problem: \"2 apples + 3 apples\". \
             Provide a clear step-by-step solution."
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
        assert!(matches!(
            parse_generate_response(&response),
            Err(SolverError::EmptyResponse)
        ));
    }
}
