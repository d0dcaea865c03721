use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirTypeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Prediction Error: {0}")]
    Prediction(String),
}

pub type AtResult<T> = Result<T, AirTypeError>;
