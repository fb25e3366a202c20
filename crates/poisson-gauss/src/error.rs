use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter {name} = {value}, must be positive and finite")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Cannot compute {what} of an empty sequence")]
    EmptyInput { what: &'static str },

    #[error("Failed to allocate frequency table")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: expected a non-negative integer, found {token:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("Failed to read answer from the terminal")]
    Prompt(#[source] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
