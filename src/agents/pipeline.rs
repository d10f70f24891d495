use std::sync::Arc;

use crate::{
    agents::{
        genre_analyzer::{self, GenreAnalyzer},
        idea_generator::{self, IdeaGenerator},
        recommendation::{self, RecommendationAgent},
        recommender_client::RecommenderClient,
    },
    llm::ChatModel,
    models::{MovieIdeaReport, Recommendations},
};

/// Prompt → genres → recommendations → movie idea.
///
/// Every step that fails is replaced by that step's default, so a run always
/// produces a report. Recommendations come from the catalog service when one
/// is configured and reachable, then from the model, then from the defaults.
pub struct IdeaPipeline {
    genre_analyzer: GenreAnalyzer,
    recommendation_agent: RecommendationAgent,
    idea_generator: IdeaGenerator,
    recommender: Option<RecommenderClient>,
}

impl IdeaPipeline {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            genre_analyzer: GenreAnalyzer::new(model.clone()),
            recommendation_agent: RecommendationAgent::new(model.clone()),
            idea_generator: IdeaGenerator::new(model),
            recommender: None,
        }
    }

    pub fn with_recommender(mut self, recommender: RecommenderClient) -> Self {
        self.recommender = Some(recommender);
        self
    }

    pub async fn run(&self, prompt: &str) -> MovieIdeaReport {
        let genres = match self.genre_analyzer.analyze(prompt).await {
            Ok(genres) => genres,
            Err(e) => {
                tracing::warn!(error = %e, "Genre analysis failed, using default genres");
                genre_analyzer::default_genres()
            }
        };

        let recommendations = self.recommend(&genres).await;

        let movie_idea = match self
            .idea_generator
            .generate(prompt, &genres, &recommendations)
            .await
        {
            Ok(idea) => idea,
            Err(e) => {
                tracing::warn!(error = %e, "Idea generation failed, using default idea");
                idea_generator::default_idea()
            }
        };

        MovieIdeaReport {
            user_prompt: prompt.to_string(),
            genres,
            recommendations,
            movie_idea,
        }
    }

    async fn recommend(&self, genres: &[String]) -> Recommendations {
        if let Some(recommender) = &self.recommender {
            match recommender.recommend_pair(genres).await {
                Ok(recommendations) => return recommendations,
                Err(e) => {
                    tracing::warn!(error = %e, "Recommender unavailable, asking the model instead");
                }
            }
        }

        match self.recommendation_agent.recommend(genres).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation agent failed, using defaults");
                recommendation::default_recommendations()
            }
        }
    }
}
