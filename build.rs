use chrono::Utc;

fn main() {
    // footer shows when the site was last built
    println!("cargo:rustc-env=BUILD_TIME={}", Utc::now().to_rfc3339());
    println!("cargo:rerun-if-changed=build.rs");
}
