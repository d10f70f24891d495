use std::{fmt::Display, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Which catalog a request targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CatalogType {
    Movies,
    Books,
}

impl CatalogType {
    pub const ALL: [CatalogType; 2] = [CatalogType::Movies, CatalogType::Books];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogType::Movies => "movies",
            CatalogType::Books => "books",
        }
    }
}

impl Display for CatalogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = CatalogType::ALL.iter().map(|k| k.as_str()).collect();
                AppError::InvalidInput(format!("Invalid type. Choose from: {:?}", allowed))
            })
    }
}

/// A recommendable movie or book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// The static dataset, keyed by catalog type.
///
/// A key missing from the source document is an empty catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<CatalogItem>,
    #[serde(default)]
    pub books: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(movies: Vec<CatalogItem>, books: Vec<CatalogItem>) -> Self {
        Self { movies, books }
    }

    /// Items of one catalog, in stored order
    pub fn items(&self, kind: CatalogType) -> &[CatalogItem] {
        match kind {
            CatalogType::Movies => &self.movies,
            CatalogType::Books => &self.books,
        }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Catalog(format!("Invalid catalog document: {}", e)))
    }

    /// Reads and parses the catalog document at `path`
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_json_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            movies = catalog.movies.len(),
            books = catalog.books.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }
}
