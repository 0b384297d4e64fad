use std::env;
use std::path::PathBuf;

fn main() {
    // Build the native sorting routine as a static library
    cc::Build::new()
        .warnings(true)
        .file("c_src/sorting.c")
        .cpp(false)
        .compile("sorting");

    println!("cargo:rerun-if-changed=c_src/sorting.c");

    // Generate the C header for the exported surface
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_dir = PathBuf::from(&crate_dir).join("include");
    std::fs::create_dir_all(&output_dir).unwrap();

    let config = cbindgen::Config::from_file("cbindgen.toml").unwrap_or_default();

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(output_dir.join("zipcensus.h"));

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
