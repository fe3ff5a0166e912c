//! Runtime support for files embedded into Rust source at build time.
//!
//! The companion crate `bindata_build` runs in your `build.rs`. It reads asset
//! files and writes a Rust source file into `OUT_DIR` that reproduces each
//! file's exact bytes together with the metadata it had when the build ran.
//! This crate holds everything that generated file links against.
//!
//! ## How It Works
//!
//! 1.  **Build Script:** `bindata_build::Config` collects your asset files and
//!     writes `bindata.rs`, choosing one of four encodings (compressed or raw,
//!     borrowed zero-copy view or owned copy).
//! 2.  **Inclusion:** [`include_bindata!`] pulls the generated file into a
//!     module of your crate.
//! 3.  **Registration:** calling the generated `register()` function wires the
//!     module into the process-wide [`Registry`], so [`asset`], [`asset_dir`]
//!     and [`asset_names`] work without naming the generated module.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! bindata = "0.1"
//!
//! [build-dependencies]
//! bindata_build = "0.1"
//! ```
//!
//! ```ignore
//! // build.rs
//! bindata_build::Config::new("assets")
//!     .prefix("assets")
//!     .build()
//!     .expect("Failed to embed assets");
//! ```
//!
//! ```ignore
//! // src/main.rs
//! mod assets {
//!     bindata::include_bindata!();
//! }
//!
//! fn main() {
//!     assets::register();
//!     let logo = bindata::asset("logo.png").expect("logo is embedded");
//!     println!("logo is {} bytes long", logo.len());
//! }
//! ```

mod error;
mod info;
mod registry;

pub use error::ReadError;
pub use info::{FileInfo, unix_time};
pub use registry::{Backend, Registry, asset, asset_dir, asset_names, register};

/// Includes the source file written by `bindata_build` from `OUT_DIR`.
///
/// Without arguments this includes `bindata.rs`, the default output name.
/// Pass a file name to include a different output.
#[macro_export]
macro_rules! include_bindata {
    () => {
        include!(concat!(env!("OUT_DIR"), "/bindata.rs"));
    };
    ($file:literal) => {
        include!(concat!(env!("OUT_DIR"), "/", $file));
    };
}

/// Re-exports used by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use zstd;
}
