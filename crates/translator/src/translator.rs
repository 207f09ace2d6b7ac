use crate::processor::{AslProcessor, IslProcessor, SignProcessor};
use crate::store::VideoStore;
use signbridge_cache::TranslationCache;
use signbridge_models::{SignError, SignLanguage, TranslationOutcome};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Dispatches text to the processor for the requested language.
pub struct SignLanguageTranslator {
    isl: IslProcessor,
    asl: AslProcessor,
}

impl SignLanguageTranslator {
    pub fn new(store: Arc<VideoStore>) -> Self {
        Self {
            isl: IslProcessor::new(store.clone()),
            asl: AslProcessor::new(store),
        }
    }

    pub fn processor(&self, language: SignLanguage) -> &dyn SignProcessor {
        match language {
            SignLanguage::Isl => &self.isl,
            SignLanguage::Asl => &self.asl,
        }
    }

    /// Fails only for an unsupported language; processing errors are in-band.
    pub fn translate(&self, text: &str, language: &str) -> Result<TranslationOutcome, SignError> {
        let language: SignLanguage = language.parse()?;
        Ok(self.processor(language).translate(text))
    }
}

/// A translation together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub language: SignLanguage,
    pub outcome: TranslationOutcome,
    pub cache_hit: bool,
}

/// Read-through cache in front of [`SignLanguageTranslator`]. Only
/// successful outcomes are stored.
pub struct CachedTranslator {
    inner: SignLanguageTranslator,
    cache: Option<TranslationCache>,
}

impl CachedTranslator {
    pub fn new(inner: SignLanguageTranslator, cache: Option<TranslationCache>) -> Self {
        Self { inner, cache }
    }

    pub fn uncached(inner: SignLanguageTranslator) -> Self {
        Self::new(inner, None)
    }

    pub fn cache(&self) -> Option<&TranslationCache> {
        self.cache.as_ref()
    }

    pub fn inner(&self) -> &SignLanguageTranslator {
        &self.inner
    }

    #[instrument(skip(self))]
    pub fn translate(&self, text: &str, language: &str) -> Result<Translation, SignError> {
        let language: SignLanguage = language.parse()?;

        if let Some(cache) = &self.cache {
            if let Some(outcome) = cache.get(text, language.as_str()) {
                return Ok(Translation {
                    language,
                    outcome,
                    cache_hit: true,
                });
            }
        }

        let outcome = self.inner.processor(language).translate(text);
        if let Some(cache) = &self.cache {
            if outcome.success {
                cache.set(text, language.as_str(), &outcome);
            } else {
                debug!("Not caching failed translation");
            }
        }

        Ok(Translation {
            language,
            outcome,
            cache_hit: false,
        })
    }
}
