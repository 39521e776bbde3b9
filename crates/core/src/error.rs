#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },
}
