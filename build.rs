use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright and the generator meta tag are stamped at build time so
    // the server render and the hydrated client always agree.
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
