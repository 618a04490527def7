//! Generator configuration.
//!
//! Plain serde data; the CLI layers it from defaults, `schemagen.toml`,
//! `SCHEMAGEN_*` variables and flags.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemagenError};

/// Knobs of a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Path of the runtime crate in generated code.
    pub crate_path: String,

    /// Type names that always carry the type-phase capability.
    pub containers: Vec<String>,

    /// Modules whose types always carry the type-phase capability, so that
    /// aliases like `required::NonEmpty<String>` are recognized.
    pub container_modules: Vec<String>,

    /// Extra type names known to implement `TypeValidate`.
    pub bearing: Vec<String>,

    /// Also emit a `Reflect` impl, so generated types join Walker
    /// traversals as opaque nodes. Disable when the type already derives
    /// `Reflect`.
    pub emit_reflect: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            crate_path: "::vouch_validator".to_owned(),
            containers: vec!["Required".to_owned(), "Optional".to_owned()],
            container_modules: vec!["required".to_owned(), "optional".to_owned()],
            bearing: Vec::new(),
            emit_reflect: true,
        }
    }
}

impl GeneratorConfig {
    /// `crate_path` parsed as a Rust path.
    pub fn crate_path(&self) -> Result<syn::Path> {
        syn::parse_str(&self.crate_path).map_err(|e| {
            SchemagenError::unsupported(&self.crate_path, format!("invalid crate path: {e}"))
        })
    }

    /// Whether a type path names something with the type-phase capability:
    /// a container, a type inside a container module, or a bearing name.
    pub(crate) fn is_bearing_path(&self, path: &syn::Path) -> bool {
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        let Some((last, modules)) = segments.split_last() else {
            return false;
        };

        self.containers.contains(last)
            || self.bearing.contains(last)
            || modules
                .last()
                .is_some_and(|module| self.container_modules.contains(module))
    }
}
