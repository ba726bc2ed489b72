use async_trait::async_trait;

use crate::server::error::translation::TranslationError;

/// Text translation provider.
///
/// Given a layer's source text and a target language code, returns the
/// translated text. Implementations may call out to a remote service.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        source_text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError>;
}

/// Stand-in provider that ignores the source text.
///
/// Produces `"Translated: <target_language>"` for every request.
pub struct PlaceholderTranslator;

#[async_trait]
impl Translator for PlaceholderTranslator {
    async fn translate(
        &self,
        _source_text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        Ok(format!("Translated: {}", target_language))
    }
}
