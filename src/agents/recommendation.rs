use std::sync::Arc;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    llm::{ChatModel, ChatRequest},
    models::{Recommendation, Recommendations},
};

pub const SYSTEM_PROMPT: &str = "You are a content recommendation specialist.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// Asks the model for one movie and one book matching a genre list
#[derive(Clone)]
pub struct RecommendationAgent {
    model: Arc<dyn ChatModel>,
}

impl RecommendationAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn recommend(&self, genres: &[String]) -> AppResult<Recommendations> {
        let request = ChatRequest::new(
            SYSTEM_PROMPT,
            format!(
                "Recommend one movie and one book that match these genres: {}. \
                 Return a JSON object with 'movie' and 'book' objects, each containing 'title', \
                 'creator' (director/author), 'year', and 'description'.",
                genres.join(", ")
            ),
        )
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS)
        .json();

        let content = self.model.complete(request).await?;
        parse_recommendations(&content)
    }
}

#[derive(Deserialize)]
struct RawRecommendations {
    movie: Option<Recommendation>,
    book: Option<Recommendation>,
}

/// Parses `{"movie": {...}, "book": {...}}`; both entries are required
pub fn parse_recommendations(content: &str) -> AppResult<Recommendations> {
    let raw: RawRecommendations = serde_json::from_str(content.trim()).map_err(|e| {
        AppError::MalformedResponse(format!("Recommendation response is not valid: {}", e))
    })?;

    match (raw.movie, raw.book) {
        (Some(movie), Some(book)) if !movie.title.is_empty() && !book.title.is_empty() => {
            Ok(Recommendations { movie, book })
        }
        _ => Err(AppError::MalformedResponse(
            "Recommendation response needs both a movie and a book".to_string(),
        )),
    }
}

/// Used when neither the recommender service nor the model can answer
pub fn default_recommendations() -> Recommendations {
    Recommendations {
        movie: Recommendation {
            title: "Inception".to_string(),
            creator: "Christopher Nolan".to_string(),
            year: "2010".to_string(),
            description:
                "A thief who steals corporate secrets through the use of dream-sharing technology."
                    .to_string(),
        },
        book: Recommendation {
            title: "The Hitchhiker's Guide to the Galaxy".to_string(),
            creator: "Douglas Adams".to_string(),
            year: "1979".to_string(),
            description:
                "A comedic science fiction series following the adventures of an unwitting human."
                    .to_string(),
        },
    }
}
