use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plates operations
#[derive(Error, Diagnostic, Debug)]
pub enum PlatesError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(plates::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(plates::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Decode error: {message}")]
    #[diagnostic(code(plates::decode))]
    Decode {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(plates::encode))]
    Encode {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported image format: {extension}")]
    #[diagnostic(code(plates::format))]
    UnsupportedFormat {
        extension: String,
        #[help]
        help: Option<String>,
    },

    #[error("Size mismatch in {context}: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    #[diagnostic(
        code(plates::size),
        help("All images combined in one step must be derived from the same source image")
    )]
    SizeMismatch {
        context: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(plates::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PlatesError>;
