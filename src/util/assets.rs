use std::{borrow::Cow, sync::OnceLock};

use dioxus::logger::tracing::warn;
use rust_embed::RustEmbed;
use thiserror::Error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("embedded asset not found: {0}")]
    Missing(String),
    #[error("embedded asset {0} is not valid UTF-8")]
    NotUtf8(String),
}

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| or_empty(load_text("/assets/main.css")))
        .as_str()
}

/// Returns a data URI for the window favicon.
pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| or_empty(load_data_uri("/assets/favicon.svg")))
        .as_str()
}

fn or_empty(result: Result<String, AssetError>) -> String {
    result.unwrap_or_else(|err| {
        warn!("{err}");
        String::new()
    })
}

fn load_text(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    String::from_utf8(asset.into_owned()).map_err(|_| AssetError::NotUtf8(path.to_string()))
}

fn load_data_uri(path: &str) -> Result<String, AssetError> {
    let asset = load_asset(path)?;
    let mime = guess_mime(path);
    let encoded = encode_base64(asset.as_ref());
    Ok(format!("data:{mime};base64,{encoded}"))
}

fn load_asset(path: &str) -> Result<Cow<'static, [u8]>, AssetError> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .ok_or_else(|| AssetError::Missing(path.to_string()))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    trimmed
        .strip_prefix("assets/")
        .unwrap_or(trimmed)
        .to_string()
}

fn guess_mime(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        output.push(TABLE[(b0 >> 2) as usize] as char);
        output.push(TABLE[(((b0 & 0b11) << 4) | (b1 >> 4)) as usize] as char);
        output.push(if chunk.len() > 1 {
            TABLE[(((b1 & 0b1111) << 2) | (b2 >> 6)) as usize] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            TABLE[(b2 & 0b0011_1111) as usize] as char
        } else {
            '='
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn canonical_paths_drop_the_assets_prefix() {
        assert_eq!(canonical_asset_path("/assets/main.css"), "main.css");
        assert_eq!(canonical_asset_path("favicon.svg"), "favicon.svg");
    }

    #[test]
    fn embedded_assets_are_present() {
        assert!(main_css().contains(".app-shell"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn missing_assets_are_reported() {
        assert_eq!(
            load_text("/assets/nope.css"),
            Err(AssetError::Missing("/assets/nope.css".to_string()))
        );
    }
}
