use crate::{
    models::{Catalog, CatalogItem, CatalogType},
    services::{similarity, vectorizer::VectorizeError},
};

/// Below any achievable score, so the first item always becomes the best
const SCORE_SENTINEL: f64 = -1.0;

/// Winning catalog item and its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}

/// Finds the item of `kind` whose genres best cover `query_genres`.
///
/// Items are scanned in stored order and the best is replaced only on strict
/// improvement, so ties go to the earlier item. Returns `None` for an empty
/// catalog.
pub fn rank<'a>(
    catalog: &'a Catalog,
    kind: CatalogType,
    query_genres: &[String],
) -> Result<Option<RankedItem<'a>>, VectorizeError> {
    let mut best: Option<RankedItem<'a>> = None;
    let mut best_score = SCORE_SENTINEL;

    for item in catalog.items(kind) {
        let score = similarity::score(query_genres, &item.genres)?;

        tracing::debug!(catalog = %kind, item = %item.name, score, "Scored item");

        if score > best_score {
            best_score = score;
            best = Some(RankedItem { item, score });
        }
    }

    Ok(best)
}
