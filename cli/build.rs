/// Capture build metadata for `domain::build_info`.
///
/// The toolchain version comes from `built`. The injected fields are read
/// from the `BOOT_*` environment of the `cargo build` invocation and always
/// re-exported, empty when unset, so the crate can use `env!` for them.
use std::env;

const INJECTED_VARS: [&str; 5] = [
    "BOOT_VERSION",
    "BOOT_REVISION",
    "BOOT_BRANCH",
    "BOOT_BUILD_USER",
    "BOOT_BUILD_DATE",
];

fn main() {
    built::write_built_file().unwrap_or_else(|e| panic!("write built.rs: {e}"));

    for var in INJECTED_VARS {
        println!("cargo::rerun-if-env-changed={var}");
        let value = env::var(var).unwrap_or_default();
        // rustc-env values end at the first newline.
        let value = value.replace(['\r', '\n'], " ");
        println!("cargo::rustc-env={var}={value}");
    }

    println!("cargo::rerun-if-changed=assets");
}
