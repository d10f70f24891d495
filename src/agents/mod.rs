//! The movie idea pipeline and its agents.
//!
//! Agents return errors instead of swallowing them; [`IdeaPipeline`] decides
//! which default replaces a failed step.

pub mod genre_analyzer;
pub mod idea_generator;
pub mod pipeline;
pub mod recommendation;
pub mod recommender_client;

pub use genre_analyzer::GenreAnalyzer;
pub use idea_generator::IdeaGenerator;
pub use pipeline::IdeaPipeline;
pub use recommendation::RecommendationAgent;
pub use recommender_client::RecommenderClient;
