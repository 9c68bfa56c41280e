#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Parse Error on line {line}: {message}")]
    Parse { line: u64, message: String },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
