use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=REDUCE_BLAS_LIB");
    println!("cargo:rerun-if-env-changed=REDUCE_BLAS_LIB_DIR");

    // Only the `blas` backend needs a native library.
    if env::var("CARGO_FEATURE_BLAS").is_err() {
        return;
    }

    if let Ok(dir) = env::var("REDUCE_BLAS_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    match env::var("REDUCE_BLAS_LIB") {
        Ok(lib) => println!("cargo:rustc-link-lib={}", lib),
        Err(_) if target_os == "macos" => println!("cargo:rustc-link-lib=framework=Accelerate"),
        Err(_) => println!("cargo:rustc-link-lib=openblas"),
    }
}
