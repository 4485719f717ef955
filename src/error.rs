use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fimage operations.
///
/// The image core itself never fails; errors only arise where images meet
/// the outside world (scene files, manifests, PNG output).
#[derive(Error, Diagnostic, Debug)]
pub enum FimageError {
    #[error("IO error: {0}")]
    #[diagnostic(code(fimage::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fimage::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(fimage::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Scene error: {message}")]
    #[diagnostic(code(fimage::scene))]
    Scene {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(fimage::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FimageError>;
