use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    /// The translation provider could not produce text for the request.
    #[error("Translation provider failed: {0}")]
    Provider(String),
}
