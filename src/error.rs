use std::path::Path;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ReadError,
    ParseError,
    WriteError,
    NotFound,
    ValidationError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadError => "READ_ERROR",
            Self::ParseError => "PARSE_ERROR",
            Self::WriteError => "WRITE_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TodoError {
    pub code: ErrorCode,
    pub message: String,
}

impl TodoError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::new(
            ErrorCode::ReadError,
            format!("Could not read {}: {source}", path.display()),
        )
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::ParseError,
            format!("Could not parse {}: {source}", path.display()),
        )
    }

    pub fn write(path: &Path, source: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::WriteError,
            format!("Could not write {}: {source}", path.display()),
        )
    }

    pub fn not_found(id: u64) -> Self {
        Self::new(ErrorCode::NotFound, format!("Task not found: {id}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }
}
