//! Lookup functions over every asset of a run.
//!
//! These are the entry points `register()` hands to the `bindata` registry.
use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
};

use crate::Asset;

const LOOKUP: &str = r#"
fn bindata_lookup(name: &str) -> Option<BindataLoader> {
    let canonical = name.replace('\\', "/");
    BINDATA_TOC
        .iter()
        .find(|(known, _)| *known == canonical)
        .map(|&(_, load)| load)
}

/// Returns the bytes of the asset called `name`.
pub fn asset(name: &str) -> Result<Cow<'static, [u8]>, ReadError> {
    let load = bindata_lookup(name).ok_or_else(|| ReadError::NotFound(name.to_owned()))?;
    load().map(BindataAsset::into_bytes)
}

/// Returns the metadata of the asset called `name`.
pub fn asset_info(name: &str) -> Result<BindataFileInfo, ReadError> {
    let load = bindata_lookup(name).ok_or_else(|| ReadError::NotFound(name.to_owned()))?;
    load().map(|asset| *asset.info())
}

/// Names of all embedded assets.
pub fn asset_names() -> Vec<&'static str> {
    BINDATA_TOC.iter().map(|&(name, _)| name).collect()
}

/// Returns the children of the directory `name`; `""` is the root.
pub fn asset_dir(name: &str) -> Result<Vec<&'static str>, ReadError> {
    let canonical = name.replace('\\', "/");
    let canonical = canonical.trim_matches('/');
    BINDATA_DIRS
        .iter()
        .find(|(dir, _)| *dir == canonical)
        .map(|(_, children)| children.to_vec())
        .ok_or_else(|| ReadError::NotFound(name.to_owned()))
}
"#;

/// Writes the asset table, the directory tree and the lookup functions.
pub(crate) fn write_index(w: &mut dyn Write, toc: &[Asset]) -> io::Result<()> {
    w.write_all(b"type BindataLoader = fn() -> Result<BindataAsset, ReadError>;\n\n")?;

    w.write_all(b"static BINDATA_TOC: &[(&str, BindataLoader)] = &[\n")?;
    for asset in toc {
        writeln!(w, "    ({:?}, {}),", asset.name, asset.func)?;
    }
    w.write_all(b"];\n\n")?;

    w.write_all(b"static BINDATA_DIRS: &[(&str, &[&str])] = &[\n")?;
    for (dir, children) in directories(toc) {
        let children: Vec<String> = children.iter().map(|child| format!("{child:?}")).collect();
        writeln!(w, "    ({dir:?}, &[{}]),", children.join(", "))?;
    }
    w.write_all(b"];\n")?;

    w.write_all(LOOKUP.as_bytes())
}

/// Every directory implied by the asset names, with its sorted children.
fn directories(toc: &[Asset]) -> BTreeMap<String, BTreeSet<String>> {
    let mut dirs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    dirs.insert(String::new(), BTreeSet::new());

    for asset in toc {
        let mut parent = String::new();
        for part in asset.name.split('/').filter(|part| !part.is_empty()) {
            dirs.entry(parent.clone())
                .or_default()
                .insert(part.to_owned());
            if !parent.is_empty() {
                parent.push('/');
            }
            parent.push_str(part);
        }
    }
    dirs
}
