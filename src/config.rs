use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the JSON catalog, relative to the service root
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Base URL of the recommender service, used by the idea pipeline
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,

    /// OpenAI API key. Only the idea pipeline needs it.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// OpenAI-compatible API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Chat model used by every agent
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Request timeout for LLM calls, in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub llm_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_catalog_path() -> String {
    "data/data.json".to_string()
}

fn default_recommender_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_llm_timeout_secs() -> u64 {
    120
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the API key, rejecting missing or blank values
    pub fn require_openai_api_key(&self) -> anyhow::Result<&str> {
        match self.openai_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(anyhow::anyhow!(
                "OPENAI_API_KEY is not set. Add it to the environment or a .env file."
            )),
        }
    }
}
