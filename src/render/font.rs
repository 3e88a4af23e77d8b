//! Worksheet font resolution with a process-wide cache for remote fetches.
//!
//! The builtin Helvetica covers the default English labels; a custom TTF
//! (file path or URL) is needed for titles outside its encoding, e.g.
//! Japanese. A URL is fetched at most once per process: the bytes are
//! cached on first success and reused by every later render.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Remote font bytes keyed by URL. Initialized empty, populated on first
/// successful fetch, read thereafter; never mutated mid-request.
static REMOTE_FONT_CACHE: Lazy<Mutex<HashMap<String, Arc<Vec<u8>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch `url` once and keep the bytes for the rest of the process.
fn remote_font(url: &str) -> Result<Arc<Vec<u8>>> {
    if let Some(bytes) = REMOTE_FONT_CACHE.lock().unwrap().get(url) {
        debug!("font cache hit for {url}");
        return Ok(Arc::clone(bytes));
    }

    info!("fetching worksheet font from {url}");
    let response = ureq::get(url)
        .call()
        .map_err(|e| Error::FontLoad(format!("{url}: {e}")))?;
    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| Error::FontLoad(format!("{url}: {e}")))?;

    let bytes = Arc::new(bytes);
    REMOTE_FONT_CACHE
        .lock()
        .unwrap()
        .insert(url.to_string(), Arc::clone(&bytes));
    Ok(bytes)
}

/// Resolve the font bytes for a render.
///
/// `None` selects the builtin Helvetica. A value is either an `http(s)://`
/// URL (fetched once, cached process-wide) or a local file path (read per
/// call). Failures map to [`Error::FontLoad`] and are never retried
/// automatically; the user retries the action instead.
pub fn resolve(font: Option<&str>) -> Result<Option<Arc<Vec<u8>>>> {
    match font {
        None => Ok(None),
        Some(source) if is_remote(source) => remote_font(source).map(Some),
        Some(path) => {
            let bytes = std::fs::read(path)
                .map_err(|e| Error::FontLoad(format!("{path}: {e}")))?;
            Ok(Some(Arc::new(bytes)))
        }
    }
}

/// True when `text` needs glyphs the builtin font's encoding (WinAnsi,
/// approximated here as Latin-1) cannot represent.
pub fn outside_builtin_encoding(text: &str) -> bool {
    text.chars().any(|c| c as u32 > 0x00FF)
}
