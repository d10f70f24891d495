use std::{
    io::{self, BufRead, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use genre_recommender::{
    agents::{IdeaPipeline, RecommenderClient},
    config::Config,
    llm::OpenAiClient,
    logging,
    models::{MovieIdeaReport, Recommendation},
};

/// Turns a short prompt into genres, a movie and book pairing, and a movie idea
#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    /// Movie idea prompt; read from stdin when omitted
    prompt: Vec<String>,
}

impl Cli {
    /// Prompt words joined back into one string, if any were given
    fn prompt(&self) -> Option<String> {
        let prompt = self.prompt.join(" ").trim().to_string();
        (!prompt.is_empty()).then_some(prompt)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init("genre_recommender=warn");

    let config = Config::from_env()?;
    let api_key = config
        .require_openai_api_key()
        .context("Missing required API keys")?;

    let model = OpenAiClient::new(
        api_key,
        config.openai_api_url.as_str(),
        config.openai_model.as_str(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    let recommender = RecommenderClient::new(config.recommender_api_url.as_str())?;
    let pipeline = IdeaPipeline::new(Arc::new(model)).with_recommender(recommender);

    let prompt = match cli.prompt() {
        Some(prompt) => prompt,
        None => read_prompt()?,
    };
    if prompt.is_empty() {
        anyhow::bail!("A movie idea prompt is required");
    }

    let report = pipeline.run(&prompt).await;
    print_report(&report);

    Ok(())
}

/// One line from stdin
fn read_prompt() -> anyhow::Result<String> {
    print!("Enter a movie idea prompt: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn describe(recommendation: &Recommendation) -> String {
    let mut line = recommendation.title.clone();
    if !recommendation.year.is_empty() {
        line.push_str(&format!(" ({})", recommendation.year));
    }
    if !recommendation.creator.is_empty() {
        line.push_str(&format!(" - {}", recommendation.creator));
    }
    line
}

fn print_report(report: &MovieIdeaReport) {
    println!("\n==== MOVIE IDEA GENERATION RESULTS ====\n");
    println!("Based on your prompt: '{}'", report.user_prompt);
    println!("\nGenres: {}", report.genres.join(", "));
    println!("\nRecommendations:");
    println!("  Movie: {}", describe(&report.recommendations.movie));
    println!("  Book: {}", describe(&report.recommendations.book));
    println!("\nYour Movie Idea:");
    println!("{}", report.movie_idea);
}
