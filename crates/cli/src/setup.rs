use anyhow::{Context, Result};
use signbridge_api::{default_asset, default_asset_paths};
use signbridge_models::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, PartialEq)]
pub struct SetupReport {
    pub created_dirs: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
}

/// Create the directory layout and drop in the default page and assets.
/// Existing files are left alone.
pub fn run_setup(config: &Config) -> Result<SetupReport> {
    let mut report = SetupReport::default();

    for dir in config.required_dirs() {
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
            report.created_dirs.push(dir);
        }
    }

    for asset in default_asset_paths() {
        let target = asset_target(config, &asset);
        if target.exists() {
            report.skipped_files.push(target);
            continue;
        }
        let Some(bytes) = default_asset(&asset) else {
            continue;
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, bytes.as_ref())
            .with_context(|| format!("writing {}", target.display()))?;
        info!("Wrote {}", target.display());
        report.written_files.push(target);
    }

    Ok(report)
}

/// Map a bundled asset path onto the configured directories.
fn asset_target(config: &Config, asset: &str) -> PathBuf {
    if let Some(rest) = asset.strip_prefix("templates/") {
        Path::new(&config.storage.templates_dir).join(rest)
    } else if let Some(rest) = asset.strip_prefix("static/") {
        Path::new(&config.storage.static_dir).join(rest)
    } else {
        PathBuf::from(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_creates_layout_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().rooted_at(dir.path());

        let report = run_setup(&config).unwrap();
        assert_eq!(report.created_dirs.len(), 5);
        for sub in ["static/videos", "static/css", "static/js", "templates", "cache"] {
            assert!(dir.path().join(sub).is_dir(), "missing {sub}");
        }
        assert!(dir.path().join("templates/index.html").is_file());
        assert!(dir.path().join("static/css/style.css").is_file());
        assert!(dir.path().join("static/js/app.js").is_file());
    }

    #[test]
    fn setup_is_idempotent_and_keeps_edits() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().rooted_at(dir.path());
        run_setup(&config).unwrap();

        let index = dir.path().join("templates/index.html");
        fs::write(&index, "custom").unwrap();

        let report = run_setup(&config).unwrap();
        assert!(report.created_dirs.is_empty());
        assert!(report.written_files.is_empty());
        assert_eq!(fs::read_to_string(index).unwrap(), "custom");
    }
}
