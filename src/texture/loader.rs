/// Texture load confirmation
///
/// The scene composer refuses to show geometry until the pair under the
/// cursor has demonstrably decodable images, so this module decodes each
/// side off the UI thread and reports back per-side. A side that fails to
/// decode degrades to "not rendered" rather than surfacing an error.

use std::path::PathBuf;

use image::GenericImageView;
use thiserror::Error;
use tokio::task;

use crate::state::data::{ImageRef, Side, StereoPair};

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("task join error: {0}")]
    Join(String),
}

/// A successfully decoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub path: ImageRef,
    pub width: u32,
    pub height: u32,
}

/// Load outcome for one pair, tagged with the cursor position it was
/// requested for so stale results can be discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPair {
    pub index: usize,
    pub left: Option<TextureInfo>,
    pub right: Option<TextureInfo>,
}

impl LoadedPair {
    /// True once anything at this index is renderable
    pub fn any_loaded(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

/// Decode both present sides of a pair in the background.
///
/// Failures are logged and mapped to an absent side; an all-absent result
/// leaves the ready flag unset and the viewer blank for that slot.
pub async fn load_pair(index: usize, pair: StereoPair) -> LoadedPair {
    let left = load_side(index, Side::Left, pair.left).await;
    let right = load_side(index, Side::Right, pair.right).await;
    LoadedPair { index, left, right }
}

async fn load_side(index: usize, side: Side, image: Option<ImageRef>) -> Option<TextureInfo> {
    let path = image?;
    match load_texture(path.clone()).await {
        Ok(info) => Some(info),
        Err(e) => {
            eprintln!(
                "⚠️  Failed to load {} image for pair {}: {}",
                side.label(),
                index,
                e
            );
            None
        }
    }
}

/// Decode one image and return its dimensions
///
/// Decoding is CPU-bound, so it runs on the blocking pool.
pub async fn load_texture(path: ImageRef) -> Result<TextureInfo, TextureError> {
    task::spawn_blocking(move || load_texture_blocking(path))
        .await
        .map_err(|e| TextureError::Join(e.to_string()))?
}

fn load_texture_blocking(path: ImageRef) -> Result<TextureInfo, TextureError> {
    let fs_path = PathBuf::from(&path);
    if !fs_path.exists() {
        return Err(TextureError::NotFound(fs_path));
    }

    let decoded = image::open(&fs_path)?;
    let (width, height) = decoded.dimensions();

    Ok(TextureInfo {
        path,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_not_found() {
        let result = load_texture_blocking("/nonexistent/left.jpeg".to_string());
        assert!(matches!(result, Err(TextureError::NotFound(_))));
    }

    #[test]
    fn test_undecodable_file_reports_decode_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("stereo-viewer-test-not-an-image.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_texture_blocking(path.to_string_lossy().to_string());
        assert!(matches!(result, Err(TextureError::Decode(_))));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_loaded_pair_readiness() {
        let none = LoadedPair {
            index: 0,
            left: None,
            right: None,
        };
        assert!(!none.any_loaded());

        let one_side = LoadedPair {
            index: 0,
            left: Some(TextureInfo {
                path: "a.jpg".to_string(),
                width: 640,
                height: 480,
            }),
            right: None,
        };
        assert!(one_side.any_loaded());
    }
}
