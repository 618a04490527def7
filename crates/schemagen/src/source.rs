//! Source loading: the top-level declarations of one Rust file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use syn::{Item, ItemEnum, ItemStruct, ItemType};
use tracing::debug;

use crate::error::{Result, SchemagenError};

/// Top-level declarations of a source file, in declaration order.
///
/// Items nested in inline modules or functions are not visible: the generated
/// artifact is included next to the declarations it validates and shares
/// their scope.
#[derive(Debug, Clone)]
pub struct SourceModule {
    path: PathBuf,
    structs: IndexMap<String, ItemStruct>,
    enums: IndexMap<String, ItemEnum>,
    aliases: IndexMap<String, ItemType>,
}

/// A declaration found by name.
#[derive(Debug, Clone, Copy)]
pub enum Declared<'a> {
    Struct(&'a ItemStruct),
    Enum(&'a ItemEnum),
    Alias(&'a ItemType),
}

impl SourceModule {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| SchemagenError::io(path, e))?;
        Self::parse(path, &text)
    }

    /// Parses `text`; `path` is used in diagnostics only.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let file = syn::parse_file(text).map_err(|source| SchemagenError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut module = Self {
            path: path.to_path_buf(),
            structs: IndexMap::new(),
            enums: IndexMap::new(),
            aliases: IndexMap::new(),
        };
        for item in file.items {
            match item {
                Item::Struct(item) => {
                    module.structs.insert(item.ident.to_string(), item);
                }
                Item::Enum(item) => {
                    module.enums.insert(item.ident.to_string(), item);
                }
                Item::Type(item) => {
                    module.aliases.insert(item.ident.to_string(), item);
                }
                _ => {}
            }
        }

        debug!(
            path = %module.path.display(),
            structs = module.structs.len(),
            enums = module.enums.len(),
            aliases = module.aliases.len(),
            "loaded source"
        );
        Ok(module)
    }

    /// Path the module was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up a top-level declaration.
    pub fn lookup(&self, name: &str) -> Option<Declared<'_>> {
        if let Some(item) = self.structs.get(name) {
            return Some(Declared::Struct(item));
        }
        if let Some(item) = self.enums.get(name) {
            return Some(Declared::Enum(item));
        }
        self.aliases.get(name).map(Declared::Alias)
    }

    /// Every top-level struct, in declaration order.
    pub fn structs(&self) -> impl Iterator<Item = &ItemStruct> {
        self.structs.values()
    }

    pub(crate) fn get_struct(&self, name: &str) -> Option<&ItemStruct> {
        self.structs.get(name)
    }

    pub(crate) fn get_alias(&self, name: &str) -> Option<&ItemType> {
        self.aliases.get(name)
    }
}
