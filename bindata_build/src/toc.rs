//! Table of contents: which files get embedded, and under what names.
use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};

use crate::{Error, Result};

/// One file to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Logical name used for lookups, `/` separated.
    pub name: String,
    /// Identifier the generated items are named after.
    pub func: String,
    /// Where the bytes and metadata are read from during generation.
    pub path: PathBuf,
}

/// A file or directory handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub path: PathBuf,
    /// Whether subdirectories of a directory input are walked too.
    pub recursive: bool,
}

/// Names the generated file defines itself; assets may not shadow them.
pub(crate) const RESERVED: &[&str] = &[
    "asset",
    "asset_dir",
    "asset_info",
    "asset_names",
    "bindata_lookup",
    "bindata_read",
    "register",
];

/// Appends every file under `input` to `toc`.
///
/// Directory entries are visited in file name order so that two runs over the
/// same tree produce the same table. `known` tracks identifiers already handed
/// out across all inputs.
///
/// # Errors
/// Returns an [`Error`] if `input` does not exist, cannot be read, or contains
/// something that is neither a file nor a directory.
pub fn find_files(
    input: &Input,
    prefix: Option<&Path>,
    toc: &mut Vec<Asset>,
    known: &mut HashSet<String>,
) -> Result<()> {
    visit(&input.path, input.recursive, true, prefix, toc, known)
}

fn visit(
    path: &Path,
    recursive: bool,
    top: bool,
    prefix: Option<&Path>,
    toc: &mut Vec<Asset>,
    known: &mut HashSet<String>,
) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|_| {
        Error::PathNotFound(
            path.display().to_string(),
            std::env::current_dir().map_or_else(|_| "unknown".into(), |p| p.display().to_string()),
        )
    })?;

    if metadata.is_dir() {
        if !top && !recursive {
            return Ok(());
        }
        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();
        for entry in entries {
            visit(&entry, recursive, false, prefix, toc, known)?;
        }
        Ok(())
    } else if metadata.is_file() {
        let name = asset_name(path, prefix);
        let func = safe_function_name(&name, known);
        toc.push(Asset {
            name,
            func,
            path: path.to_path_buf(),
        });
        Ok(())
    } else {
        Err(Error::UnsupportedFileType(path.display().to_string()))
    }
}

/// The logical name of `path`: `prefix` stripped, `/` separated, relative.
fn asset_name(path: &Path, prefix: Option<&Path>) -> String {
    let relative = prefix
        .and_then(|prefix| path.strip_prefix(prefix).ok())
        .unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Derives a unique Rust identifier for the asset called `name`.
///
/// The name is lowercased and everything outside `[a-z0-9_]` becomes `_`.
/// Identifiers that would start with a digit get a leading `_`; keywords and
/// names the generated file uses itself get a trailing `_`. Clashes with any
/// symbol of an earlier asset (`<id>`, `<id>_bytes`, `_<id>`) get a numeric
/// suffix.
pub fn safe_function_name(name: &str, known: &mut HashSet<String>) -> String {
    let mut base: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if base.is_empty() || base.starts_with(|c: char| c.is_ascii_digit()) {
        base.insert(0, '_');
    }
    if RESERVED.contains(&base.as_str()) || syn::parse_str::<syn::Ident>(&base).is_err() {
        base.push('_');
    }

    let mut candidate = base.clone();
    let mut counter = 2;
    while symbols(&candidate).iter().any(|symbol| known.contains(symbol)) {
        candidate = format!("{base}{counter}");
        counter += 1;
    }

    known.extend(symbols(&candidate));
    candidate
}

/// Every item name the generated file derives from the identifier `func`.
pub(crate) fn symbols(func: &str) -> [String; 3] {
    [func.to_owned(), format!("{func}_bytes"), format!("_{func}")]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(input: &str) -> String {
        safe_function_name(input, &mut HashSet::new())
    }

    #[test]
    fn names_become_snake_case_identifiers() {
        assert_eq!(name("logo.png"), "logo_png");
        assert_eq!(name("css/Site-Main.css"), "css_site_main_css");
        assert_eq!(name("héllo"), "h_llo");
    }

    #[test]
    fn invalid_starts_and_keywords_are_fixed_up() {
        assert_eq!(name("404.html"), "_404_html");
        assert_eq!(name("fn"), "fn_");
        assert_eq!(name(""), "__");
        assert_eq!(name("_"), "__");
        assert_eq!(name("register"), "register_");
    }

    #[test]
    fn clashes_get_numbered() {
        let mut known = HashSet::new();
        assert_eq!(safe_function_name("a.txt", &mut known), "a_txt");
        assert_eq!(safe_function_name("a-txt", &mut known), "a_txt2");
        assert_eq!(safe_function_name("a txt", &mut known), "a_txt3");
        assert_eq!(safe_function_name("a.txt.bytes", &mut known), "a_txt_bytes2");
        // `_a_txt`, `_a_txt2` and `_a_txt3` are already the statics of the
        // first three assets.
        assert_eq!(safe_function_name("_a.txt", &mut known), "_a_txt4");
    }

    #[test]
    fn directories_are_walked_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/deep")).unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b/x.bin"), [0u8, 1]).unwrap();
        fs::write(dir.path().join("b/deep/y.txt"), "y").unwrap();

        let input = Input {
            path: dir.path().to_path_buf(),
            recursive: true,
        };
        let mut toc = Vec::new();
        find_files(&input, Some(dir.path()), &mut toc, &mut HashSet::new()).unwrap();

        let names: Vec<&str> = toc.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b/deep/y.txt", "b/x.bin", "c.txt"]);
        assert_eq!(toc[1].func, "b_deep_y_txt");
        assert_eq!(toc[2].path, dir.path().join("b/x.bin"));
    }

    #[test]
    fn non_recursive_inputs_skip_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.txt"), "top").unwrap();
        fs::write(dir.path().join("sub/inner.txt"), "inner").unwrap();

        let input = Input {
            path: dir.path().to_path_buf(),
            recursive: false,
        };
        let mut toc = Vec::new();
        find_files(&input, Some(dir.path()), &mut toc, &mut HashSet::new()).unwrap();

        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].name, "top.txt");
    }

    #[test]
    fn missing_inputs_are_reported() {
        let input = Input {
            path: PathBuf::from("definitely/not/here"),
            recursive: true,
        };
        let err = find_files(&input, None, &mut Vec::new(), &mut HashSet::new()).unwrap_err();
        assert!(matches!(err, Error::PathNotFound(path, _) if path.contains("not")));
    }
}
