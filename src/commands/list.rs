//! `modelpack list` command — list models present in the local store.
//!
//! Reads the store's manifest library and prints each model with its
//! installed versions. For example:
//!
//!     modelpack list

use std::collections::BTreeMap;
use std::path::Path;

use clap::Args;

use crate::config;
use crate::store::MANIFEST_LIBRARY_PATH;

#[derive(Args)]
pub struct ListArgs {}

pub fn execute(_args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let library = config::store_root().join(MANIFEST_LIBRARY_PATH);

    println!("--- {} ---", library.display());
    for (name, versions) in collect_models(&library)? {
        println!("{}: {}", name, versions.join(","));
    }

    Ok(())
}

/// Walk the manifest library two levels deep: each model is a directory,
/// each version a non-directory child within it.
fn collect_models(library: &Path) -> std::io::Result<BTreeMap<String, Vec<String>>> {
    let mut models = BTreeMap::new();

    for entry in std::fs::read_dir(library)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();

        let mut versions = Vec::new();
        for version in std::fs::read_dir(entry.path())? {
            let version = version?;
            if !version.path().is_dir() {
                versions.push(version.file_name().to_string_lossy().into_owned());
            }
        }
        versions.sort();
        models.insert(name, versions);
    }

    Ok(models)
}
