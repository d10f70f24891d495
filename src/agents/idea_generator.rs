use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    llm::{ChatModel, ChatRequest},
    models::Recommendations,
};

pub const SYSTEM_PROMPT: &str = "You are a creative movie idea generator.";
const TEMPERATURE: f32 = 0.8;
const MAX_TOKENS: u32 = 500;

/// Brainstorms a movie concept from the user's prompt
#[derive(Clone)]
pub struct IdeaGenerator {
    model: Arc<dyn ChatModel>,
}

impl IdeaGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Generates an idea, using the analyzed genres and recommendations as
    /// reference points
    pub async fn generate(
        &self,
        prompt: &str,
        genres: &[String],
        recommendations: &Recommendations,
    ) -> AppResult<String> {
        let request = ChatRequest::new(
            SYSTEM_PROMPT,
            format!(
                "Brainstorm creative movie concept ideas based on this prompt. \
                 Focus on unique hooks, twists, or mashups that could make an interesting film: {}\n\n\
                 Genres: {}\nFor inspiration: the movie \"{}\" and the book \"{}\".",
                prompt,
                genres.join(", "),
                recommendations.movie.title,
                recommendations.book.title
            ),
        )
        .temperature(TEMPERATURE)
        .max_tokens(MAX_TOKENS);

        let idea = self.model.complete(request).await?;
        let idea = idea.trim();

        if idea.is_empty() {
            return Err(AppError::MalformedResponse(
                "Idea generator returned an empty idea".to_string(),
            ));
        }

        Ok(idea.to_string())
    }
}

pub fn default_idea() -> String {
    "A person discovers they can communicate with objects, leading to unexpected adventures \
     and insights into the human condition."
        .to_string()
}
