use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck parsing error: {0}")]
    DeckParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
