//! Generator driver: requested names in, one formatted artifact out.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::emit::Emitter;
use crate::error::{Result, SchemagenError};
use crate::ident::Names;
use crate::lock::shape_lock;
use crate::schema::Analysis;
use crate::source::{Declared, SourceModule};

/// Suffix replacing `.rs` in artifact file names.
pub const ARTIFACT_SUFFIX: &str = ".schema.rs";

/// Generates `TypeValidate` impls and shape locks for named structs.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the artifact text for `types` declared in `module`.
    ///
    /// Requested names are deduplicated keeping their first occurrence.
    /// Bearing local structs they reach are generated after them.
    pub fn generate(&self, module: &SourceModule, types: &[String]) -> Result<String> {
        let requested = dedup(types);
        if requested.is_empty() {
            return Err(SchemagenError::unsupported("", "no type requested"));
        }

        let krate = self.config.crate_path()?;
        let analysis = Analysis::new(module, &self.config)?;

        let mut roots = Vec::with_capacity(requested.len());
        for name in &requested {
            match module.lookup(name) {
                None => return Err(SchemagenError::UnknownType { name: name.clone() }),
                Some(Declared::Enum(_)) => {
                    return Err(SchemagenError::unsupported(name.as_str(), "enums are not supported"));
                }
                Some(Declared::Alias(_)) => {
                    return Err(SchemagenError::unsupported(
                        name.as_str(),
                        "type aliases are not supported; request the aliased struct",
                    ));
                }
                Some(Declared::Struct(_)) => {}
            }
            let decl = analysis
                .get(name)
                .ok_or_else(|| SchemagenError::UnknownType { name: name.clone() })?;
            if decl.manual {
                return Err(SchemagenError::unsupported(
                    name.as_str(),
                    "marked #[vouch(type_validate)]; it implements TypeValidate by hand",
                ));
            }
            roots.push(decl);
        }

        let mut names = Names::default();
        let mut items = TokenStream::new();
        for decl in analysis.closure(&roots) {
            debug!(declaration = %decl.item.ident, "generating");
            items.extend(shape_lock(&decl.item));
            let mut emitter = Emitter::new(&krate, &mut names);
            items.extend(emitter.type_validate_impl(decl));
            if self.config.emit_reflect {
                items.extend(emitter.reflect_impl(decl));
            }
        }

        let file: syn::File = syn::parse2(items).map_err(|e| {
            SchemagenError::unsupported(requested.join(","), format!("emitted code does not parse: {e}"))
        })?;
        Ok(format!(
            "{}\n\n{}",
            header(&requested),
            prettyplease::unparse(&file)
        ))
    }

    /// Loads `source` and renders its artifact in memory.
    pub fn render(&self, source: &Path, types: &[String], out_dir: Option<&Path>) -> Result<Artifact> {
        let module = SourceModule::load(source)?;
        let contents = self.generate(&module, types)?;
        Ok(Artifact {
            path: output_path(source, out_dir),
            contents,
        })
    }
}

/// Generated text and the path it belongs at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

/// What [`Artifact::write`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

impl Artifact {
    /// Writes the artifact atomically: a temporary file in the target
    /// directory is persisted over the destination. An identical file on
    /// disk is left untouched.
    pub fn write(&self) -> Result<WriteOutcome> {
        if self.on_disk()?.as_deref() == Some(self.contents.as_str()) {
            debug!(path = %self.path.display(), "artifact unchanged");
            return Ok(WriteOutcome::Unchanged);
        }

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| SchemagenError::io(&dir, e))?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| SchemagenError::io(&dir, e))?;
        temp.write_all(self.contents.as_bytes())
            .map_err(|e| SchemagenError::io(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| SchemagenError::io(&self.path, e.error))?;

        info!(path = %self.path.display(), bytes = self.contents.len(), "wrote artifact");
        Ok(WriteOutcome::Written)
    }

    /// Fails with [`SchemagenError::Stale`] unless the file on disk matches.
    pub fn check(&self) -> Result<()> {
        if self.on_disk()?.as_deref() == Some(self.contents.as_str()) {
            debug!(path = %self.path.display(), "artifact up to date");
            Ok(())
        } else {
            Err(SchemagenError::Stale {
                path: self.path.clone(),
            })
        }
    }

    fn on_disk(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SchemagenError::io(&self.path, e)),
        }
    }
}

/// `models.rs` becomes `models.schema.rs`, next to the source or in `out_dir`.
pub fn output_path(source: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = source
        .file_stem()
        .map_or_else(|| "schema".to_owned(), |stem| stem.to_string_lossy().into_owned());
    let name = format!("{stem}{ARTIFACT_SUFFIX}");
    match out_dir {
        Some(dir) => dir.join(name),
        None => source.with_file_name(name),
    }
}

fn header(types: &[String]) -> String {
    format!(
        "// Code generated by \"schemagen --type {}\". DO NOT EDIT.",
        types.join(",")
    )
}

fn dedup(types: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(types.len());
    for name in types.iter().map(|name| name.trim()).filter(|name| !name.is_empty()) {
        if !seen.iter().any(|existing: &String| existing == name) {
            seen.push(name.to_owned());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("src/models.rs"), None),
            PathBuf::from("src/models.schema.rs")
        );
        assert_eq!(
            output_path(Path::new("src/models.rs"), Some(Path::new("gen"))),
            PathBuf::from("gen/models.schema.rs")
        );
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let names: Vec<String> = ["B", "A", " B", "", "C", "A"].map(String::from).to_vec();
        assert_eq!(dedup(&names), ["B", "A", "C"]);
    }

    #[test]
    fn header_lists_requested_names() {
        assert_eq!(
            header(&["User".to_owned(), "Team".to_owned()]),
            "// Code generated by \"schemagen --type User,Team\". DO NOT EDIT."
        );
    }
}
