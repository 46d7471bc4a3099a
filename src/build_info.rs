//! Compile-time build metadata exposed to the `--version` surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("MARQUEE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("MARQUEE_BUILD_TIMESTAMP");

/// Render CLI version block used by `marquee --version`.
pub fn cli_version_text() -> String {
    format!("marquee {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
