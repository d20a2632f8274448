use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Map a request path onto a file path relative to an app's content dir.
///
/// Returns `None` for paths that could leave the content directory: `..`
/// segments, backslashes, drive prefixes or null bytes. `/` maps to
/// `index.html`.
pub fn resolve_content_path(request_path: &str) -> Option<PathBuf> {
    if request_path.contains('\0') || request_path.contains('\\') {
        return None;
    }

    let mut relative = PathBuf::new();
    for segment in request_path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." || segment.contains(':') {
            return None;
        }
        relative.push(segment);
    }

    if relative.as_os_str().is_empty() || request_path.ends_with('/') {
        relative.push(INDEX_FILE);
    }

    Some(relative)
}

/// Directory requests are served by their `index.html`.
pub(crate) async fn existing_file(content_dir: &Path, relative: &Path) -> Option<PathBuf> {
    let candidate = content_dir.join(relative);
    let metadata = tokio::fs::metadata(&candidate).await.ok()?;

    if metadata.is_file() {
        return Some(candidate);
    }

    if metadata.is_dir() {
        let index = candidate.join(INDEX_FILE);
        if tokio::fs::metadata(&index).await.ok()?.is_file() {
            return Some(index);
        }
    }

    None
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}
