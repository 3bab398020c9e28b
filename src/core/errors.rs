use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareMathError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ShareMathError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ShareMathError {
    fn from(error: std::io::Error) -> Self {
        ShareMathError::Io(Box::new(error))
    }
}
