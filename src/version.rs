//! Version and build information for docdate
//!
//! Provides version string and build metadata (commit SHA, rustc version).

/// Get the full version string including build metadata
///
/// Returns format: "docdate {version} ({commit}) rustc {rustc_version}"
pub fn version() -> String {
    format!(
        "docdate {} ({}) rustc {}",
        package_version(),
        build_commit(),
        rustc_version()
    )
}

/// Get the package version (e.g., "0.1.0")
pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the build commit SHA
///
/// Returns "unknown" if not built with commit info
pub fn build_commit() -> &'static str {
    option_env!("DOCDATE_COMMIT_SHA").unwrap_or("unknown")
}

/// Get the Rust compiler version used for the build
///
/// Returns "unknown" if not built with rustc version info
pub fn rustc_version() -> &'static str {
    option_env!("DOCDATE_RUSTC_VERSION").unwrap_or("unknown")
}
