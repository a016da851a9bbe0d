use std::env;
use std::fs;
use std::path::Path;

// Copies the card's image assets next to the built binary so the
// relative `images/...` sources in the product payload resolve.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let exe_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3) // Traverse from OUT_DIR to target/debug/
        .expect("Failed to determine target directory");

    let destination = exe_dir.join("images");
    fs::create_dir_all(&destination).expect("Failed to create images folder");

    for entry in fs::read_dir("public/images").expect("Failed to read public/images") {
        let entry = entry.expect("Failed to read asset entry");
        fs::copy(entry.path(), destination.join(entry.file_name()))
            .expect("Failed to copy image asset");
    }

    println!("cargo:rerun-if-changed=public/images");
}
