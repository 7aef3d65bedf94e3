use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing editor environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid editor environment variable {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
