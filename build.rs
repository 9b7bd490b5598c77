use std::{env, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=include/nativelib.h");

    // The harness is plain C calling back into our exports, so it only makes
    // sense when something links the two together (the crate's own tests).
    if env::var_os("CARGO_FEATURE_C_HARNESS").is_none() {
        return;
    }

    let src_dir = Path::new("csrc");
    let include_dir = Path::new("include");

    let source_files = ["harness.c"];
    for file in source_files.iter() {
        println!("cargo:rerun-if-changed={}", src_dir.join(file).display());
    }

    let mut build = cc::Build::new();
    build
        .files(source_files.iter().map(|f| src_dir.join(f)))
        .include(include_dir)
        .extra_warnings(false)
        .flag_if_supported("-Wno-unused-parameter");

    if env::var_os("CARGO_FEATURE_PRINT").is_some() {
        build.define("NATIVELIB_HAS_PRINT", None);
    }

    build.compile("nativelib_harness");
}
