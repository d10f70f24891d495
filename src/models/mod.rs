mod catalog;
mod idea;
mod recommendation;

pub use catalog::{Catalog, CatalogItem, CatalogType};
pub use idea::{MovieIdeaReport, Recommendation, Recommendations};
pub use recommendation::{RecommendationRequest, RecommendationResponse};
