//! Embedded assets — static files compiled into the binary.
//!
//! At compile time, `include_dir!` embeds everything under the crate's
//! `assets/` directory. Asset names are `/`-separated paths that keep the
//! `assets/` root, e.g. `assets/files/sample.txt`.

use std::path::Path;

use include_dir::{Dir, File, include_dir};

use crate::domain::AssetError;

/// All embedded assets, compiled in at build time.
static EMBEDDED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Root prefix of every embedded asset name.
const EMBEDDED_ROOT: &str = "assets";

/// Read-only name → bytes lookup over an embedded directory tree.
#[derive(Debug, Clone, Copy)]
pub struct AssetRegistry {
    root: &'static str,
    dir: &'static Dir<'static>,
}

impl AssetRegistry {
    /// Registry over `dir`, with names prefixed by `root`.
    #[must_use]
    pub const fn new(root: &'static str, dir: &'static Dir<'static>) -> Self {
        Self { root, dir }
    }

    /// Registry over the assets compiled into this binary.
    #[must_use]
    pub const fn embedded() -> Self {
        Self::new(EMBEDDED_ROOT, &EMBEDDED_ASSETS)
    }

    /// Names of every embedded file, sorted. Directories are not listed.
    #[must_use]
    pub fn asset_names(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(self.dir, &mut files);
        let mut names: Vec<String> = files.iter().map(|f| self.name_of(f.path())).collect();
        names.sort_unstable();
        names
    }

    /// Return the raw bytes of a single embedded asset.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotFound`] if no file with the given `name`
    /// exists, including when `name` refers to a directory.
    pub fn get_asset(&self, name: &str) -> Result<&'static [u8], AssetError> {
        name.strip_prefix(self.root)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rel| !rel.is_empty())
            .and_then(|rel| self.dir.get_file(rel))
            .map(File::contents)
            .ok_or_else(|| AssetError::NotFound(name.to_owned()))
    }

    fn name_of(&self, path: &Path) -> String {
        let mut name = self.root.to_owned();
        for part in path.components() {
            name.push('/');
            name.push_str(&part.as_os_str().to_string_lossy());
        }
        name
    }
}

fn collect_files(dir: &'static Dir<'static>, out: &mut Vec<&'static File<'static>>) {
    out.extend(dir.files());
    for sub in dir.dirs() {
        collect_files(sub, out);
    }
}

/// Names of every asset compiled into this binary, sorted.
#[must_use]
pub fn asset_names() -> Vec<String> {
    AssetRegistry::embedded().asset_names()
}

/// Return the raw bytes of an asset compiled into this binary.
///
/// # Errors
///
/// Returns [`AssetError::NotFound`] if no asset with the given `name` exists.
pub fn get_asset(name: &str) -> Result<&'static [u8], AssetError> {
    AssetRegistry::embedded().get_asset(name)
}
