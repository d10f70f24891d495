pub mod ranker;
pub mod recommendations;
pub mod similarity;
pub mod vectorizer;
