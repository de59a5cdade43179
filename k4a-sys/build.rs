fn main() {
    #[cfg(feature = "run-bindgen")]
    {
        let bindings = bindgen::Builder::default()
            // The input header we would like to generate bindings for.
            .header("include/k4a.h")
            // derive defaults if possible
            .derive_default(true)
            // Tell cargo to invalidate the built crate whenever any of the
            // included header files changed.
            .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
            // Finish the builder and generate the bindings.
            .generate()
            .expect("Unable to generate bindings");

        let bindings_dir = std::env::current_dir().unwrap().join("bindings");
        let bindings_file = bindings_dir.join("k4a.rs");
        bindings
            .write_to_file(bindings_file)
            .expect("Couldn't write bindings!");
    }

    // The SDK comes from the libk4a system packages. K4A_SDK_LIB_DIR
    // overrides the search path for non-standard install locations.
    if let Ok(dir) = std::env::var("K4A_SDK_LIB_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }
    println!("cargo:rerun-if-env-changed=K4A_SDK_LIB_DIR");

    // tell rustc to link the shared library
    println!("cargo:rustc-link-lib=k4a");
}
