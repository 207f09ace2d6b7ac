use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Default page and static assets, used when the deployment has not
/// provided its own files.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct DefaultAssets;

pub const INDEX_TEMPLATE: &str = "templates/index.html";

/// Relative paths of every bundled asset, e.g. `static/css/style.css`.
pub fn default_asset_paths() -> Vec<String> {
    DefaultAssets::iter().map(|p| p.into_owned()).collect()
}

pub fn default_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    DefaultAssets::get(path).map(|file| file.data)
}
