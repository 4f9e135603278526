//! Target OS naming shared with the benchmark tooling.

/// Normalize a raw platform string into the identifier benchmark tooling expects.
///
/// Accepts both `sys.platform`-style spellings (`darwin`, `win32`, `linux2`)
/// and already-normalized names, which pass through unchanged.
pub fn fixup_target_os(raw: &str) -> String {
    if raw == "darwin" {
        return "mac".to_string();
    }
    if raw.starts_with("win") {
        return "windows".to_string();
    }
    if raw.starts_with("linux") {
        return "linux".to_string();
    }
    raw.to_string()
}

/// Map a Rust target OS name (`std::env::consts::OS`) to its `sys.platform` spelling.
pub fn host_platform_name(rust_os: &str) -> &str {
    match rust_os {
        "macos" => "darwin",
        "windows" => "win32",
        other => other,
    }
}
