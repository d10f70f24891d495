use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{
        CatalogType, Recommendation, RecommendationRequest, RecommendationResponse, Recommendations,
    },
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the recommender's `POST /recommend/`
#[derive(Clone)]
pub struct RecommenderClient {
    http_client: HttpClient,
    base_url: String,
}

impl RecommenderClient {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Best catalog match of one type
    pub async fn recommend(
        &self,
        kind: CatalogType,
        genres: &[String],
    ) -> AppResult<RecommendationResponse> {
        let url = format!("{}/recommend/", self.base_url);
        let request = RecommendationRequest {
            kind: kind.to_string(),
            genres: genres.to_vec(),
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(body);
            return Err(AppError::ExternalApi(format!(
                "Recommender returned status {}: {}",
                status, detail
            )));
        }

        Ok(response.json().await?)
    }

    /// One movie and one book from the catalog
    pub async fn recommend_pair(&self, genres: &[String]) -> AppResult<Recommendations> {
        let movie = self.recommend(CatalogType::Movies, genres).await?;
        let book = self.recommend(CatalogType::Books, genres).await?;

        tracing::info!(
            movie = %movie.name,
            book = %book.name,
            "Catalog recommendations received"
        );

        Ok(Recommendations {
            movie: movie.into(),
            book: book.into(),
        })
    }
}

impl From<RecommendationResponse> for Recommendation {
    /// The catalog has no creator or year, so those stay blank
    fn from(response: RecommendationResponse) -> Self {
        Recommendation {
            title: response.name,
            creator: String::new(),
            year: String::new(),
            description: response.description,
        }
    }
}
