//! Build script for glycemia
//!
//! Embeds build metadata for `--version` style reporting.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if let Ok(version) = env::var("CARGO_PKG_VERSION") {
        println!("cargo:rustc-env=GLYCEMIA_VERSION={}", version);
    }

    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=GLYCEMIA_TARGET={}", target);
    }
}
