use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    llm::{ChatModel, ChatRequest},
};

pub const SYSTEM_PROMPT: &str = "You are a genre analysis specialist for movies.";
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 150;

/// Identifies the genres a movie idea prompt belongs to
#[derive(Clone)]
pub struct GenreAnalyzer {
    model: Arc<dyn ChatModel>,
}

impl GenreAnalyzer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn analyze(&self, prompt: &str) -> AppResult<Vec<String>> {
        let request = ChatRequest::new(
            SYSTEM_PROMPT,
            format!(
                "Analyze this movie idea prompt and identify the most relevant genres. \
                 Return only a JSON array of genre names (2-4 genres): {}",
                prompt
            ),
        )
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS)
        .json();

        let content = self.model.complete(request).await?;
        let genres = parse_genres(&content)?;

        tracing::info!(genres = ?genres, "Genres identified");
        Ok(genres)
    }
}

/// Extracts genre names from the model's JSON.
///
/// Accepts `{"genres": [...]}`, any object whose first array value holds the
/// genres, or a bare array.
pub fn parse_genres(content: &str) -> AppResult<Vec<String>> {
    let value: Value = serde_json::from_str(content.trim())
        .map_err(|e| AppError::MalformedResponse(format!("Genre response is not JSON: {}", e)))?;

    let candidates: Vec<&Vec<Value>> = match &value {
        Value::Array(items) => vec![items],
        Value::Object(map) => map
            .get("genres")
            .and_then(Value::as_array)
            .into_iter()
            .chain(map.values().filter_map(Value::as_array))
            .collect(),
        _ => Vec::new(),
    };

    candidates
        .into_iter()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|genre| !genre.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .find(|genres| !genres.is_empty())
        .ok_or_else(|| AppError::MalformedResponse("Genre response holds no genres".to_string()))
}

/// Used when the model cannot be reached or answers nonsense
pub fn default_genres() -> Vec<String> {
    vec![
        "Drama".to_string(),
        "Adventure".to_string(),
        "Comedy".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockChatModel;

    #[test]
    fn test_parse_genres_key() {
        let genres = parse_genres(r#"{"genres": ["Science Fiction", "Thriller"]}"#).unwrap();
        assert_eq!(genres, vec!["Science Fiction", "Thriller"]);
    }

    #[test]
    fn test_parse_first_array_value() {
        let genres = parse_genres(r#"{"note": "x", "result": ["Horror"]}"#).unwrap();
        assert_eq!(genres, vec!["Horror"]);
    }

    #[test]
    fn test_empty_genres_key_falls_through_to_other_arrays() {
        let genres = parse_genres(r#"{"genres": [], "suggested": ["Western"]}"#).unwrap();
        assert_eq!(genres, vec!["Western"]);
    }

    #[test]
    fn test_parse_bare_array() {
        let genres = parse_genres(r#"[" Comedy ", "", 3, "Romance"]"#).unwrap();
        assert_eq!(genres, vec!["Comedy", "Romance"]);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(matches!(
            parse_genres("Comedy, Romance"),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_object_without_genres() {
        assert!(parse_genres(r#"{"genres": []}"#).is_err());
        assert!(parse_genres(r#""Drama""#).is_err());
    }

    #[tokio::test]
    async fn test_analyze_sends_prompt_and_parses_reply() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|request| {
                request.system_prompt() == Some(SYSTEM_PROMPT)
                    && request.json_response
                    && request.max_tokens == MAX_TOKENS
                    && request.messages[1].content.ends_with("a robot learns to paint")
            })
            .times(1)
            .returning(|_| Ok(r#"{"genres": ["Drama", "Science Fiction"]}"#.to_string()));

        let analyzer = GenreAnalyzer::new(Arc::new(model));
        let genres = analyzer.analyze("a robot learns to paint").await.unwrap();
        assert_eq!(genres, vec!["Drama", "Science Fiction"]);
    }

    #[tokio::test]
    async fn test_analyze_propagates_model_error() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .returning(|_| Err(AppError::ExternalApi("down".to_string())));

        let analyzer = GenreAnalyzer::new(Arc::new(model));
        assert!(analyzer.analyze("anything").await.is_err());
    }
}
