pub mod agents;
pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;
