use std::path::PathBuf;
use thiserror::Error;

pub type FillResult<T> = Result<T, FillError>;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Unsupported data shape: {0}")]
    UnsupportedDataShape(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
