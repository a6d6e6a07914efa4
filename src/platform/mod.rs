// Platform paths
// Resolves where settings and profiles live on Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` to pick the base directory at compile time.

use std::env;
use std::path::PathBuf;

/// Directory name used under the platform base directories.
#[cfg(target_os = "linux")]
const APP_DIR: &str = "webtabs";
#[cfg(not(target_os = "linux"))]
const APP_DIR: &str = "WebTabs";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_*` override when set and non-empty, else `$HOME/<fallback>`.
#[cfg(target_os = "linux")]
fn xdg_base(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback.iter().fold(home_dir(), |path, part| path.join(part)),
    }
}

#[cfg(target_os = "windows")]
fn appdata() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}

/// Returns the directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/webtabs` or `~/.config/webtabs`
/// - **macOS**: `~/Library/Application Support/WebTabs`
/// - **Windows**: `%APPDATA%/WebTabs`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    let base = xdg_base("XDG_CONFIG_HOME", &[".config"]);
    #[cfg(target_os = "macos")]
    let base = home_dir().join("Library").join("Application Support");
    #[cfg(target_os = "windows")]
    let base = appdata();
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let base = home_dir().join(".config");

    base.join(APP_DIR)
}

/// Returns the directory holding browser profiles.
///
/// - **Linux**: `$XDG_DATA_HOME/webtabs` or `~/.local/share/webtabs`
/// - **macOS**: `~/Library/Application Support/WebTabs`
/// - **Windows**: `%APPDATA%/WebTabs`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    let base = xdg_base("XDG_DATA_HOME", &[".local", "share"]);
    #[cfg(target_os = "macos")]
    let base = home_dir().join("Library").join("Application Support");
    #[cfg(target_os = "windows")]
    let base = appdata();
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    let base = home_dir().join(".local").join("share");

    base.join(APP_DIR)
}
