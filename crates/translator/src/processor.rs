use crate::grammar::{asl_gloss, isl_gloss};
use crate::store::VideoStore;
use crate::tagger::{LexiconTagger, Tagger};
use signbridge_models::{SignLanguage, TranslationOutcome};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// One sign language pipeline: text to gloss to rendered signs.
pub trait SignProcessor: Send + Sync {
    fn language(&self) -> SignLanguage;

    fn store(&self) -> &VideoStore;

    /// Sign sequence for `text`, without rendering anything.
    fn gloss(&self, text: &str) -> Vec<String>;

    /// Full translation. Never fails: errors are reported in the outcome.
    fn translate(&self, text: &str) -> TranslationOutcome {
        let start = Instant::now();
        let signs = self.gloss(text);

        match self.store().render(self.language(), &signs) {
            Ok(video_path) => TranslationOutcome::success(
                self.language(),
                video_path,
                signs.join(" "),
                start.elapsed().as_secs_f64(),
            ),
            Err(e) => {
                warn!(language = %self.language(), "Rendering failed: {}", e);
                TranslationOutcome::failure(e.to_string())
            }
        }
    }
}

pub struct IslProcessor {
    tagger: Box<dyn Tagger>,
    store: Arc<VideoStore>,
}

impl IslProcessor {
    pub fn new(store: Arc<VideoStore>) -> Self {
        Self::with_tagger(store, Box::new(LexiconTagger::new()))
    }

    pub fn with_tagger(store: Arc<VideoStore>, tagger: Box<dyn Tagger>) -> Self {
        Self { tagger, store }
    }
}

impl SignProcessor for IslProcessor {
    fn language(&self) -> SignLanguage {
        SignLanguage::Isl
    }

    fn store(&self) -> &VideoStore {
        &self.store
    }

    fn gloss(&self, text: &str) -> Vec<String> {
        isl_gloss(text, self.tagger.as_ref())
    }
}

pub struct AslProcessor {
    store: Arc<VideoStore>,
}

impl AslProcessor {
    pub fn new(store: Arc<VideoStore>) -> Self {
        Self { store }
    }
}

impl SignProcessor for AslProcessor {
    fn language(&self) -> SignLanguage {
        SignLanguage::Asl
    }

    fn store(&self) -> &VideoStore {
        &self.store
    }

    fn gloss(&self, text: &str) -> Vec<String> {
        asl_gloss(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::PosTag;

    /// Tags every token as a verb, to check the tagger seam is honoured.
    struct AllVerbs;

    impl Tagger for AllVerbs {
        fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
            tokens.iter().map(|t| (t.clone(), PosTag::Vb)).collect()
        }
    }

    fn store() -> (tempfile::TempDir, Arc<VideoStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(VideoStore::new(dir.path()).unwrap());
        (dir, store)
    }

    #[test]
    fn isl_gloss_is_sov() {
        let (_dir, store) = store();
        let isl = IslProcessor::new(store);
        assert_eq!(isl.gloss("I am going to the market."), vec!["I", "MARKET", "AM", "GOING", "TO", "THE"]);
    }

    #[test]
    fn isl_uses_injected_tagger() {
        let (_dir, store) = store();
        let isl = IslProcessor::with_tagger(store, Box::new(AllVerbs));
        assert_eq!(isl.gloss("you eat apples"), vec!["YOU", "EAT", "APPLES"]);
    }

    #[test]
    fn translate_reports_success() {
        let (_dir, store) = store();
        let outcome = AslProcessor::new(store).translate("Thank you");
        assert!(outcome.success);
        assert_eq!(outcome.asl_gloss.as_deref(), Some("THANK YOU"));
        assert!(outcome.video_path.unwrap().starts_with("asl_"));
        assert!(outcome.processing_time.unwrap() >= 0.0);
    }

    #[test]
    fn translate_reports_failure_in_band() {
        let (dir, store) = store();
        let isl = IslProcessor::new(store);
        drop(dir);
        let outcome = isl.translate("hello");
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert!(outcome.isl_gloss.is_none());
    }
}
