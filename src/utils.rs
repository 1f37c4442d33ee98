use std::ffi::OsStr;
use std::path::Path;

/// Archive member name for a relative path, always `/`-separated
pub fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Dot-prefixed file names (`.DS_Store`, `.gitkeep`) are never packaged
pub fn is_hidden(file_name: &OsStr) -> bool {
    file_name.to_string_lossy().starts_with('.')
}

/// Format a byte count as kilobytes with two decimals
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}
