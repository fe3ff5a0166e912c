//! Build-script side of `bindata`: embeds files into generated Rust source.
//!
//! [`Config`] walks the asset inputs, and [`Generator`] writes a source file
//! which the consuming crate pulls in with `bindata::include_bindata!()`. Each
//! asset becomes three items named after its identifier `<id>`:
//!
//! - `static _<id>: &[u8]`, the (possibly compressed) data;
//! - `fn <id>_bytes()`, which recovers the original bytes;
//! - `fn <id>()`, which pairs those bytes with the file's metadata.
//!
//! The [`Strategy`] picks between zstd-compressed and raw data, and between
//! borrowing from static storage and returning an owned copy. One strategy
//! applies to the whole run.
//!
//! # Example
//! ```no_run
//! // in build.rs
//! bindata_build::Config::new("assets")
//!     .prefix("assets")
//!     .zero_copy(true)
//!     .build()
//!     .expect("Failed to embed assets");
//! ```
use std::{
    collections::HashSet,
    env,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

mod asset;
mod header;
mod index;
pub mod literal;
mod release;
mod strategy;
mod toc;

pub use release::Generator;
pub use strategy::{Emitter, Strategy};
pub use toc::{Asset, Input, find_files, safe_function_name};

//
// ==================== PUBLIC BUILDER API ====================
//

/// A builder for configuring the asset embedding process.
///
/// This provides a clean, high-level API for use in `build.rs` scripts.
///
/// # Example
/// ```no_run
/// // in build.rs
/// bindata_build::Config::new("assets")
///   .input("LICENSE")
///   .compress(false)
///   .build()
///   .expect("Failed to embed assets");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    inputs: Vec<Input>,
    recursive: bool,
    prefix: Option<PathBuf>,
    output: Option<PathBuf>,
    strategy: Strategy,
    level: i32,
}

impl Config {
    /// Creates a new configuration for a given asset path.
    ///
    /// The path can be a single file or a directory and should be relative to
    /// the crate root (`CARGO_MANIFEST_DIR`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inputs: Vec::new(),
            recursive: true,
            prefix: None,
            output: None,
            strategy: Strategy::default(),
            level: DEFAULT_COMPRESSION_LEVEL,
        }
        .input(path)
    }

    /// Adds another file or directory to embed.
    #[must_use]
    pub fn input(mut self, path: impl AsRef<Path>) -> Self {
        self.inputs.push(Input {
            path: path.as_ref().to_path_buf(),
            recursive: self.recursive,
        });
        self
    }

    /// Whether directory inputs are walked into their subdirectories.
    ///
    /// Applies to every input added so far and afterwards. Defaults to `true`.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        for input in &mut self.inputs {
            input.recursive = recursive;
        }
        self
    }

    /// Strips `prefix` from asset paths to form their names.
    #[must_use]
    pub fn prefix(mut self, prefix: impl AsRef<Path>) -> Self {
        self.prefix = Some(prefix.as_ref().to_path_buf());
        self
    }

    /// Where [`Config::build`] writes the generated file.
    ///
    /// Defaults to `$OUT_DIR/bindata.rs`.
    #[must_use]
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Stores zstd frames instead of raw bytes. Defaults to `true`.
    #[must_use]
    pub const fn compress(mut self, compress: bool) -> Self {
        self.strategy.compress = compress;
        self
    }

    /// Hands out borrowed views of static data instead of owned copies.
    /// Defaults to `false`.
    #[must_use]
    pub const fn zero_copy(mut self, zero_copy: bool) -> Self {
        self.strategy.zero_copy = zero_copy;
        self
    }

    /// Sets the zstd compression level (1-21).
    ///
    /// Higher levels provide better compression at the cost of slower build times.
    /// If not set, a default level of `6` is used.
    #[must_use]
    pub const fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Collects the assets of every input, in input order.
    ///
    /// # Errors
    /// Returns an [`Error`] if an input is missing or cannot be walked.
    pub fn toc(&self) -> Result<Vec<Asset>> {
        let mut toc = Vec::new();
        let mut known = HashSet::new();
        for input in &self.inputs {
            find_files(input, self.prefix.as_deref(), &mut toc, &mut known)?;
        }
        Ok(toc)
    }

    /// Writes the generated source for every asset into `w`.
    ///
    /// Returns the table of contents that was embedded.
    ///
    /// # Errors
    /// Returns an [`Error`] if collecting or embedding any asset fails.
    pub fn generate<W: Write>(&self, mut w: W) -> Result<Vec<Asset>> {
        let toc = self.toc()?;
        w.write_all(BANNER.as_bytes())?;
        Generator::new(self.strategy)
            .level(self.level)
            .write(w, &toc)?;
        Ok(toc)
    }

    /// Runs the embedding process with the specified configuration.
    ///
    /// This is the final method that should be called in the builder chain.
    /// It writes the generated file and tells Cargo to rerun the build script
    /// when any input changes. Returns the path of the generated file.
    ///
    /// # Errors
    /// Returns an [`Error`] if any part of the build process fails, such as file I/O
    /// or a missing `OUT_DIR`.
    pub fn build(self) -> Result<PathBuf> {
        let output = match &self.output {
            Some(output) => output.clone(),
            None => env::var("OUT_DIR")
                .map(|dir| PathBuf::from(dir).join(DEFAULT_OUTPUT))
                .map_err(|_| Error::Var("OUT_DIR"))?,
        };

        let file = File::create(&output).map_err(|source| Error::Create {
            path: output.clone(),
            source,
        })?;
        let toc = self.generate(BufWriter::new(file))?;

        for input in &self.inputs {
            println!("cargo:rerun-if-changed={}", input.path.display());
        }
        for asset in &toc {
            println!("cargo:rerun-if-changed={}", asset.path.display());
        }
        Ok(output)
    }
}

/// The default compression level used by [`Config`] and [`Generator`].
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

/// File name written into `OUT_DIR` unless [`Config::output`] says otherwise.
pub const DEFAULT_OUTPUT: &str = "bindata.rs";

const BANNER: &str = "// @generated by bindata_build. DO NOT EDIT.\n\n";

/// A specialized `Result` type for build script operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while embedding assets in a build script.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("Could not open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not create '{}'", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not stat '{}'", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not compress asset {name:?}")]
    Encode {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("Environment variable '{0}' not set by Cargo")]
    Var(&'static str),
    #[error("Path '{0}' not found (current directory is '{1}')")]
    PathNotFound(String, String),
    #[error("Path '{0}' has unsupported file type")]
    UnsupportedFileType(String),
    #[error("'{0}' cannot be used as a Rust identifier")]
    InvalidIdentifier(String),
    #[error("Identifier '{0}' clashes with an item generated for another asset")]
    DuplicateIdentifier(String),
    #[error("Asset name {0:?} is used more than once")]
    DuplicateName(String),
}
