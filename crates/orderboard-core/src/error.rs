use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderboardError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar { name: String, value: String },

    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, OrderboardError>;
