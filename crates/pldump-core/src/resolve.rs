//! Path resolution and document loading.
//!
//! The resolver turns a user-supplied name into a `.plist` path. It is an
//! injected strategy: the caller picks the base directory once at startup
//! and hands the resolver to the load path, rather than selecting a lookup
//! scheme at compile time.

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};

use crate::error::{DumpError, Result};

/// The file extension appended to resolved names.
pub const EXTENSION: &str = "plist";

/// Resolves a base name (or path) to a `.plist` file path.
#[derive(Debug, Clone)]
pub struct Resolver {
    base_dir: PathBuf,
}

impl Default for Resolver {
    /// Resolves relative to the current directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl Resolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Strip a trailing `.plist` from `name` if the user typed one.
    pub fn stem(name: &str) -> &str {
        name.strip_suffix(".plist").unwrap_or(name)
    }

    /// Resolve `name` to a path:
    ///
    /// - a trailing `.plist` extension is stripped before re-appending, so
    ///   `pldump collections.plist` and `pldump collections` agree;
    /// - a name with a directory component is used verbatim (plus the
    ///   extension);
    /// - a bare name is joined onto the base directory.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let stem = Self::stem(name);
        // Append rather than Path::with_extension: a stem like "a.b" must
        // become "a.b.plist", not "a.plist".
        let file = format!("{stem}.{EXTENSION}");
        let has_dir = Path::new(stem)
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty());
        if has_dir {
            PathBuf::from(file)
        } else {
            self.base_dir.join(file)
        }
    }

    /// Resolve `name` and load the document's root mapping.
    ///
    /// A missing file becomes [`DumpError::NotFound`] carrying the stem, so
    /// the caller can print `no <name>.plist file found` without re-deriving
    /// it. Parse failures keep the deserializer's message.
    pub fn load(&self, name: &str) -> Result<Dictionary> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(DumpError::NotFound {
                name: Self::stem(name).to_string(),
                path,
            });
        }
        load(&path)
    }
}

/// Deserialize the file at `path` and require a dictionary root.
pub fn load(path: &Path) -> Result<Dictionary> {
    match Value::from_file(path)? {
        Value::Dictionary(dict) => Ok(dict),
        _ => Err(DumpError::RootNotMapping {
            path: path.to_path_buf(),
        }),
    }
}
