// SPDX-License-Identifier: MPL-2.0
//! Path resolution for the preferences directory.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`BRAND_PORTAL_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Only preferences live on disk. Brands and saved earrings are kept in
//! memory and never written here.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "BrandPortal";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BRAND_PORTAL_CONFIG_DIR";

/// Returns the application config directory path, preferring `override_path`.
///
/// Platform defaults:
/// - Linux: `~/.config/BrandPortal/`
/// - macOS: `~/Library/Application Support/BrandPortal/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\BrandPortal\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
