//! Writes a complete generated file for one run.
use std::{collections::HashSet, fs::File, io::Write};

use crate::{
    Asset, DEFAULT_COMPRESSION_LEVEL, Error, Result, Strategy, asset, index,
    toc::{RESERVED, symbols},
};

/// Turns a table of contents into Rust source.
///
/// Generation is a pure function of the assets' contents and metadata, the
/// strategy and the compression level: running it twice over unchanged files
/// produces identical output. The first failure aborts the run; whatever was
/// already written should be discarded.
///
/// # Example
/// ```no_run
/// use bindata_build::{Asset, Generator, Strategy};
///
/// let toc = vec![Asset {
///     name: "logo.png".into(),
///     func: "logo_png".into(),
///     path: "assets/logo.png".into(),
/// }];
/// let mut out = Vec::new();
/// Generator::new(Strategy::new(true, false))
///     .write(&mut out, &toc)
///     .expect("Failed to embed assets");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    strategy: Strategy,
    level: i32,
}

impl Generator {
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }

    /// Sets the zstd compression level. Ignored by uncompressed strategies.
    #[must_use]
    pub const fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Writes the header, every asset in `toc` order and the lookup index.
    ///
    /// # Errors
    /// Returns an [`Error`] if an identifier is unusable, a file cannot be
    /// opened, read or stat'd, compression fails, or writing to `w` fails.
    pub fn write<W: Write>(&self, mut w: W, toc: &[Asset]) -> Result<()> {
        validate(toc)?;

        let emitter = self.strategy.emitter();
        tracing::info!(
            strategy = emitter.name(),
            assets = toc.len(),
            "writing embedded assets"
        );

        emitter.write_header(&mut w)?;
        for entry in toc {
            tracing::debug!(name = %entry.name, path = %entry.path.display(), "embedding asset");
            let mut file = File::open(&entry.path).map_err(|source| Error::Open {
                path: entry.path.clone(),
                source,
            })?;
            emitter.write_asset(&mut w, entry, &mut file, self.level)?;
            asset::write_constructor(&mut w, entry)?;
        }
        index::write_index(&mut w, toc)?;
        w.flush()?;
        Ok(())
    }
}

/// Rejects tables whose generated items would not compile.
fn validate(toc: &[Asset]) -> Result<()> {
    let mut names = HashSet::new();
    let mut items = HashSet::new();
    for entry in toc {
        if syn::parse_str::<syn::Ident>(&entry.func).is_err()
            || entry.func.starts_with("r#")
            || RESERVED.contains(&entry.func.as_str())
        {
            return Err(Error::InvalidIdentifier(entry.func.clone()));
        }
        if symbols(&entry.func)
            .into_iter()
            .any(|symbol| !items.insert(symbol))
        {
            return Err(Error::DuplicateIdentifier(entry.func.clone()));
        }
        if !names.insert(entry.name.as_str()) {
            return Err(Error::DuplicateName(entry.name.clone()));
        }
    }
    Ok(())
}
