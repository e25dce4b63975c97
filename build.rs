//! Build script for canvus.
//!
//! Forwards release metadata from the build environment to the compiler so
//! `build_info` can embed it. Unset variables fall back to defaults in code.

use std::env;

const METADATA_VARS: [&str; 3] = ["CANVUS_VERSION", "CANVUS_COMMIT", "CANVUS_BUILD_DATE"];

fn main() {
    for var in METADATA_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                println!("cargo:rustc-env={var}={value}");
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
