use std::{env, path::PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    // One output per strategy, all from the same blobs.
    for (file, compress, zero_copy) in [
        ("compressed_zero_copy.rs", true, true),
        ("compressed_copy.rs", true, false),
        ("uncompressed_zero_copy.rs", false, true),
        ("uncompressed_copy.rs", false, false),
    ] {
        bindata_build::Config::new("blobs")
            .prefix("blobs")
            .compress(compress)
            .zero_copy(zero_copy)
            .output(out_dir.join(file))
            .build()
            .expect("Failed to embed assets");
    }
}
