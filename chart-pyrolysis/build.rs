use std::env;
use std::fs;
use std::path::Path;

/// Simulation outputs embedded into the WASM bundle, with a tiny stand-in
/// when the fixture has not been generated.
const DATASETS: [(&str, &str); 2] = [
    ("Res_rho_char.csv", ",0,1,2\n0,0.0,0.02,0.04\n1,0.0,0.01,0.03\n"),
    ("Res_R_kin.csv", ",0,1,2\n0,0.0,5e-6,1e-5\n1,0.0,2e-6,8e-6\n"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (file, fallback) in DATASETS {
        let src = Path::new("../fixtures").join(file);
        let dest = Path::new(&out_dir).join(file);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(&dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", file);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
