use serde::{Deserialize, Serialize};

/// One recommended work as the recommendation agent describes it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// Director or author
    #[serde(default)]
    pub creator: String,
    /// Kept as text; models return years as both strings and numbers
    #[serde(default, deserialize_with = "year_as_string")]
    pub year: String,
    #[serde(default)]
    pub description: String,
}

/// A movie and a book matching the analyzed genres
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub movie: Recommendation,
    pub book: Recommendation,
}

/// Everything the idea pipeline produced for one prompt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieIdeaReport {
    pub user_prompt: String,
    pub genres: Vec<String>,
    pub recommendations: Recommendations,
    pub movie_idea: String,
}

fn year_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected year as string or number, got {}",
            other
        ))),
    }
}
