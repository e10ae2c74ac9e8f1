//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so it can be served from an immutable,
//! content-addressed path (`/static/css/derived/main.<hash>.css`).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Number of hex characters of the digest kept in file names.
const HASH_LEN: usize = 8;

fn main() {
    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo"),
    );
    fingerprint_stylesheet(&manifest_dir.join("static/css"));
}

/// Copy `main.css` to `derived/main.<hash>.css` and export `CSS_HASH`.
fn fingerprint_stylesheet(css_dir: &Path) {
    let source = css_dir.join("main.css");
    println!("cargo:rerun-if-changed={}", source.display());

    let content = match fs::read(&source) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {}: {e}", source.display());
            println!("cargo:rustc-env=CSS_HASH=");
            return;
        }
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived_dir = css_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived CSS directory");
    fs::write(derived_dir.join(format!("main.{short}.css")), &content)
        .expect("Failed to write fingerprinted CSS");
}
