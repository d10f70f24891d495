use serde::{Deserialize, Serialize};

use super::CatalogItem;

/// Body of `POST /recommend/`.
///
/// `type` stays a plain string here; the request service validates it so the
/// error can list the allowed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub genres: Vec<String>,
}

/// Best-matching catalog item and its score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub name: String,
    pub description: String,
    pub genres: Vec<String>,
    pub similarity_score: f64,
}

impl RecommendationResponse {
    pub fn new(item: &CatalogItem, similarity_score: f64) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            genres: item.genres.clone(),
            similarity_score,
        }
    }
}
