use signbridge_models::{SignError, SignLanguage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where rendered sign sequences are written.
///
/// Real video synthesis is out of scope: each render writes a textual
/// placeholder (`<name>.txt`) next to the `.mp4` name handed back to clients.
#[derive(Debug, Clone)]
pub struct VideoStore {
    dir: PathBuf,
}

impl VideoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SignError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<lang>_<unix secs>_<8 hex>.mp4`
    pub fn next_video_name(language: SignLanguage) -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!(
            "{}_{}_{}.mp4",
            language.as_str(),
            chrono::Utc::now().timestamp(),
            &suffix[..8]
        )
    }

    pub fn placeholder_text(language: SignLanguage, signs: &[String]) -> String {
        format!("{} Signs: {}", language.label(), signs.join(" -> "))
    }

    /// Render `signs` and return the video file name.
    pub fn render(&self, language: SignLanguage, signs: &[String]) -> Result<String, SignError> {
        let video_name = Self::next_video_name(language);
        let placeholder = self.dir.join(&video_name).with_extension("txt");
        fs::write(&placeholder, Self::placeholder_text(language, signs))?;
        debug!("Wrote sign placeholder: {}", placeholder.display());
        Ok(video_name)
    }
}
