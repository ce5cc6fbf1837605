/*!
 * Utility functions for treescript
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// Names that are never replicated, whatever the caller asks for
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        // Dependencies
        "node_modules",
        "package-lock.json",
    ]
});

/// Lower-cased extensions whose content is left out of the script
pub static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff",
        // Archives
        "zip", "tar", "gz", "tgz", "rar", "7z", "bz2", "xz",
        // Media & Documents
        "mp3", "mp4", "pdf",
    ]
    .into_iter()
    .collect()
});

/// Check a file's extension against [`BINARY_EXTENSIONS`], ignoring case
pub fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(ext.as_str()))
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Quote a string for a POSIX shell
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
