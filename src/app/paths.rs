// SPDX-License-Identifier: MPL-2.0
//! Resolution of the configuration directory.
//!
//! Precedence: explicit override (CLI flag), then the `ICED_FOLIO_CONFIG_DIR`
//! environment variable, then the platform-specific config directory.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory, mainly for tests
/// and portable deployments.
pub const CONFIG_DIR_ENV: &str = "ICED_FOLIO_CONFIG_DIR";

/// Directory name under the platform config root.
const APP_DIR: &str = "iced_folio";

/// Resolves the directory that holds `settings.toml`.
pub fn config_dir(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = config_dir(Some(Path::new("/tmp/folio-test")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/folio-test")));
    }
}
