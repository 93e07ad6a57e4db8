#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

pub const VIEWER_NAME: &str = env!("CARGO_PKG_NAME");
pub const VIEWER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_profile_label() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

/// `<version>+<profile>`, e.g. `0.1.0+debug`.
pub fn build_fingerprint() -> String {
    format!("{VIEWER_VERSION}+{}", build_profile_label())
}

/// Hex of the first 16 bytes of the SHA-256 of `bytes`.
pub fn short_digest(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest[..16].iter().map(|b| format!("{b:02x}")).collect()
}
