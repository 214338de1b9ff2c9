pub mod client;
pub mod engine;

pub use client::BackendClient;
pub use engine::FeedEngine;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
