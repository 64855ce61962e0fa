/// Card thumbnail loading
///
/// Thumbnails are fetched (http/https) or read (file URLs and plain paths),
/// decoded, shrunk to a square box and cached on disk. A cached file is
/// reused on later sessions without touching the network again.

use iced::widget::image::Handle;
use image::{imageops::FilterType, ImageFormat};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Error, Debug, Clone)]
pub enum ThumbnailError {
    #[error("Could not determine cache directory")]
    NoCacheDir,
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Could not decode image: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ThumbnailError {
    fn from(e: reqwest::Error) -> Self {
        ThumbnailError::Request(e.to_string())
    }
}

impl From<image::ImageError> for ThumbnailError {
    fn from(e: image::ImageError) -> Self {
        ThumbnailError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for ThumbnailError {
    fn from(e: std::io::Error) -> Self {
        ThumbnailError::Io(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ThumbnailError {
    fn from(e: tokio::task::JoinError) -> Self {
        ThumbnailError::Io(e.to_string())
    }
}

/// Give up on a cover server that does not accept the connection
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Give up on a cover download that does not finish
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client for thumbnail requests
fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .user_agent(concat!("book-shelf/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client")
    })
}

/// Get the thumbnail cache directory
/// Returns ~/.cache/book-shelf/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> Result<PathBuf, ThumbnailError> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or(ThumbnailError::NoCacheDir)?;

    path.push("book-shelf");
    path.push("thumbnails");

    std::fs::create_dir_all(&path)?;

    Ok(path)
}

/// Stable cache file name for a thumbnail source
pub fn cache_key(src: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, src.as_bytes())
}

/// Load the thumbnail for `src`, returning the path of the cached PNG
pub async fn load_thumbnail(src: String, size: u32) -> Result<PathBuf, ThumbnailError> {
    load_thumbnail_in(get_thumbnail_cache_dir()?, src, size).await
}

/// Load the thumbnail for `src` using `cache_dir` as the on-disk cache.
/// A cached file that no longer decodes is discarded and regenerated.
pub async fn load_thumbnail_in(
    cache_dir: PathBuf,
    src: String,
    size: u32,
) -> Result<PathBuf, ThumbnailError> {
    let key = cache_key(&src);
    let thumbnail_path = cache_dir.join(format!("{}.png", key));

    if tokio::fs::try_exists(&thumbnail_path).await.unwrap_or(false) {
        let path = thumbnail_path.clone();
        if tokio::task::spawn_blocking(move || image::open(&path).is_ok()).await? {
            debug!("Thumbnail cache hit: {}", src);
            return Ok(thumbnail_path);
        }
        warn!("Discarding unreadable cached thumbnail: {}", thumbnail_path.display());
        tokio::fs::remove_file(&thumbnail_path).await?;
    }

    let data = fetch_source(&src).await?;

    // Decoding and resizing are CPU bound
    let partial_path = cache_dir.join(format!("{}.png.part", key));
    let path = partial_path.clone();
    tokio::task::spawn_blocking(move || save_thumbnail(&data, size, &path)).await??;

    // Only complete files ever appear under the final name
    tokio::fs::rename(&partial_path, &thumbnail_path).await?;

    debug!("Generated thumbnail for {}: {}", src, thumbnail_path.display());
    Ok(thumbnail_path)
}

/// Read the raw image bytes from the network or the local disk
async fn fetch_source(src: &str) -> Result<Vec<u8>, ThumbnailError> {
    if src.starts_with("http://") || src.starts_with("https://") {
        let response = http_client().get(src).send().await?.error_for_status()?;
        return Ok(response.bytes().await?.to_vec());
    }

    let path = src.strip_prefix("file://").unwrap_or(src);
    Ok(tokio::fs::read(path).await?)
}

/// Helper to decode, shrink and save a thumbnail
fn save_thumbnail(data: &[u8], size: u32, path: &Path) -> Result<(), ThumbnailError> {
    let img = image::load_from_memory(data)?;
    let thumbnail = img.resize(size, size, FilterType::Lanczos3);
    thumbnail.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Per-source loading state
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Loading,
    Ready(Handle),
    Failed(String),
}

/// In-memory index of thumbnails requested this session
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    entries: HashMap<String, ThumbnailState>,
}

impl ThumbnailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a source as loading.
    /// Returns true only the first time a source is seen, so each source is fetched once.
    pub fn request(&mut self, src: &str) -> bool {
        if src.is_empty() || self.entries.contains_key(src) {
            return false;
        }
        self.entries.insert(src.to_string(), ThumbnailState::Loading);
        true
    }

    /// Record the outcome of a load
    pub fn finish(&mut self, src: String, result: Result<PathBuf, ThumbnailError>) {
        let state = match result {
            Ok(path) => ThumbnailState::Ready(Handle::from_path(path)),
            Err(e) => {
                warn!("Thumbnail failed for {}: {}", src, e);
                ThumbnailState::Failed(e.to_string())
            }
        };
        self.entries.insert(src, state);
    }

    pub fn get(&self, src: &str) -> Option<&ThumbnailState> {
        self.entries.get(src)
    }
}
