use crate::{
    error::{AppError, AppResult},
    models::{Catalog, CatalogType, RecommendationRequest, RecommendationResponse},
    services::ranker,
};

/// Recommends the catalog item that best matches the requested genres.
///
/// Validation happens in order: the catalog type first, then the genre list.
/// A valid request against an empty catalog is `NotFound`.
pub fn recommend(
    catalog: &Catalog,
    request: &RecommendationRequest,
) -> AppResult<RecommendationResponse> {
    let kind: CatalogType = request.kind.parse()?;

    if request.genres.is_empty() {
        return Err(AppError::InvalidInput(
            "Please provide at least one genre".to_string(),
        ));
    }

    let best = ranker::rank(catalog, kind, &request.genres)?
        .ok_or_else(|| AppError::NotFound("No matching items found".to_string()))?;

    tracing::info!(
        catalog = %kind,
        genres = ?request.genres,
        name = %best.item.name,
        similarity_score = best.score,
        "Recommendation selected"
    );

    Ok(RecommendationResponse::new(best.item, best.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;

    fn request(kind: &str, genres: &[&str]) -> RecommendationRequest {
        RecommendationRequest {
            kind: kind.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![CatalogItem {
                name: "Mad Max: Fury Road".to_string(),
                description: "Post-apocalyptic chase".to_string(),
                genres: vec!["Action".to_string(), "Adventure".to_string()],
            }],
            vec![],
        )
    }

    #[test]
    fn test_recommend_success() {
        let response = recommend(&catalog(), &request("movies", &["Action", "Adventure"])).unwrap();
        assert_eq!(response.name, "Mad Max: Fury Road");
        assert_eq!(response.description, "Post-apocalyptic chase");
        assert_eq!(response.similarity_score, 2.0);
    }

    #[test]
    fn test_invalid_type_is_checked_before_genres() {
        let err = recommend(&catalog(), &request("invalid", &[])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg.starts_with("Invalid type")));
    }

    #[test]
    fn test_empty_genres_rejected() {
        let err = recommend(&catalog(), &request("movies", &[])).unwrap_err();
        assert!(err.to_string().contains("at least one genre"));
    }

    #[test]
    fn test_empty_catalog_not_found() {
        let err = recommend(&catalog(), &request("books", &["Fantasy"])).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), "No matching items found");
    }

    #[test]
    fn test_tokenless_query_genre_scores_zero() {
        let response = recommend(&catalog(), &request("movies", &["!"])).unwrap();
        assert_eq!(response.similarity_score, 0.0);
    }

    #[test]
    fn test_tokenless_pair_is_internal_error() {
        let catalog = Catalog::new(
            vec![CatalogItem {
                name: "Untitled".to_string(),
                description: String::new(),
                genres: vec!["?".to_string()],
            }],
            vec![],
        );
        let err = recommend(&catalog, &request("movies", &["!"])).unwrap_err();
        assert!(matches!(err, AppError::Vectorize(_)));
    }
}
