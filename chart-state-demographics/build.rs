use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy data.json to OUT_DIR for include_str. The dashboard cannot start
    // without it, so a missing file fails the build.
    let data_src = Path::new("../fixtures/data.json");
    if !data_src.exists() {
        panic!("missing {}: the dashboard needs its data file", data_src.display());
    }
    fs::copy(data_src, Path::new(&out_dir).join("data.json")).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/data.json");
}
