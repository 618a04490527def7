//! Type schema analysis.
//!
//! Field types are classified syntactically into [`Shape`]s. Leaves carry the
//! [`Capabilities`] the emitted code may call; composite shapes carry the
//! union of their children, so a field whose shape has no capability is
//! skipped entirely.
//!
//! Whether a local struct is itself capability-bearing depends on its own
//! fields, which may refer back to it. That is solved by a fixpoint over all
//! top-level structs of the source file.

use std::collections::HashSet;

use indexmap::IndexMap;
use syn::{
    Attribute, GenericArgument, ItemStruct, LitStr, Member, PathArguments, Token, Type, TypePath,
    ext::IdentExt,
};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{Result, SchemagenError};
use crate::source::SourceModule;

/// What emitted code may call on a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// `TypeValidate::type_validate`.
    pub type_validate: bool,
    /// `Validate::validate`, run in the cross pass.
    pub validate: bool,
}

impl Capabilities {
    /// Nothing to call.
    pub const NONE: Self = Self {
        type_validate: false,
        validate: false,
    };

    /// Only the type phase.
    pub const TYPE: Self = Self {
        type_validate: true,
        validate: false,
    };

    /// Returns `true` if either capability is present.
    pub const fn any(self) -> bool {
        self.type_validate || self.validate
    }

    /// Union of both sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            type_validate: self.type_validate || other.type_validate,
            validate: self.validate || other.validate,
        }
    }
}

/// Shape of a field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A value emitted code calls into directly. `local` names the top-level
    /// struct of the source file, if the leaf is one.
    Leaf {
        capabilities: Capabilities,
        local: Option<String>,
    },
    /// `Vec`, `VecDeque`, `LinkedList`, arrays and slices.
    Sequence(Box<Shape>),
    /// `HashMap`, `BTreeMap` and `IndexMap`; only values are visited.
    Map(Box<Shape>),
    /// `Option` (nullable), `Box` and `&mut` (never null).
    Pointer { nullable: bool, inner: Box<Shape> },
    /// A tuple; elements are paths `.0`, `.1`, ...
    Tuple(Vec<Shape>),
}

impl Shape {
    const PLAIN: Self = Self::Leaf {
        capabilities: Capabilities::NONE,
        local: None,
    };

    /// Union of the capabilities of every leaf in this shape.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Leaf { capabilities, .. } => *capabilities,
            Self::Sequence(inner) | Self::Map(inner) | Self::Pointer { inner, .. } => {
                inner.capabilities()
            }
            Self::Tuple(items) => items
                .iter()
                .fold(Capabilities::NONE, |acc, item| acc.union(item.capabilities())),
        }
    }

    /// Calls `f` with every local struct named by a leaf.
    pub fn for_each_local(&self, f: &mut impl FnMut(&str)) {
        match self {
            Self::Leaf {
                local: Some(name), ..
            } => f(name),
            Self::Leaf { local: None, .. } => {}
            Self::Sequence(inner) | Self::Map(inner) | Self::Pointer { inner, .. } => {
                inner.for_each_local(f);
            }
            Self::Tuple(items) => items.iter().for_each(|item| item.for_each_local(f)),
        }
    }

    fn resolve(&mut self, table: &IndexMap<String, Capabilities>) {
        match self {
            Self::Leaf {
                capabilities,
                local: Some(name),
            } => {
                if let Some(solved) = table.get(name) {
                    *capabilities = *solved;
                }
            }
            Self::Leaf { local: None, .. } => {}
            Self::Sequence(inner) | Self::Map(inner) | Self::Pointer { inner, .. } => {
                inner.resolve(table);
            }
            Self::Tuple(items) => items.iter_mut().for_each(|item| item.resolve(table)),
        }
    }
}

/// A visited field of a declaration.
#[derive(Debug, Clone)]
pub struct Field {
    /// How to reach the field: a name or a tuple index.
    pub member: Member,
    /// Segment used in error paths.
    pub name: String,
    pub shape: Shape,
}

/// A top-level struct together with its analyzed fields.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// The struct as written, used for the shape lock.
    pub item: ItemStruct,
    /// Fields not marked `#[vouch(skip)]`, in declaration order.
    pub fields: Vec<Field>,
    /// Capabilities of the struct used as a leaf elsewhere.
    pub capabilities: Capabilities,
    /// The struct implements `TypeValidate` by hand (`#[vouch(type_validate)]`).
    pub manual: bool,
}

impl Declaration {
    pub fn name(&self) -> String {
        self.item.ident.to_string()
    }
}

/// Every top-level struct of a source file, analyzed.
#[derive(Debug, Clone)]
pub struct Analysis {
    declarations: IndexMap<String, Declaration>,
}

impl Analysis {
    /// Analyzes every top-level struct of `module`.
    pub fn new(module: &SourceModule, config: &GeneratorConfig) -> Result<Self> {
        let mut declarations = IndexMap::new();
        for item in module.structs() {
            let markers = StructMarkers::parse(&item.attrs)
                .map_err(|e| SchemagenError::unsupported(item.ident.to_string(), e.to_string()))?;
            let classifier = Classifier::new(module, config, item);
            let mut fields = Vec::with_capacity(item.fields.len());
            for (position, field) in item.fields.iter().enumerate() {
                let markers = FieldMarkers::parse(&field.attrs).map_err(|e| {
                    SchemagenError::unsupported(item.ident.to_string(), e.to_string())
                })?;
                if markers.skip {
                    continue;
                }
                let (member, default_name) = match &field.ident {
                    Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
                    None => (Member::Unnamed(position.into()), position.to_string()),
                };
                fields.push(Field {
                    member,
                    name: markers.rename.unwrap_or(default_name),
                    shape: classifier.classify(&field.ty),
                });
            }
            declarations.insert(
                item.ident.to_string(),
                Declaration {
                    item: item.clone(),
                    fields,
                    capabilities: Capabilities {
                        type_validate: markers.type_validate,
                        validate: markers.validate,
                    },
                    manual: markers.type_validate,
                },
            );
        }

        let mut analysis = Self { declarations };
        analysis.solve();
        Ok(analysis)
    }

    /// Marks every struct with a capability-bearing field as bearing, until
    /// nothing changes, then writes the result into every local leaf.
    fn solve(&mut self) {
        let mut table: IndexMap<String, Capabilities> = self
            .declarations
            .iter()
            .map(|(name, decl)| (name.clone(), decl.capabilities))
            .collect();

        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut changed = false;
            for (name, decl) in &self.declarations {
                if table[name].type_validate {
                    continue;
                }
                let bearing = decl.fields.iter().any(|field| {
                    let mut shape = field.shape.clone();
                    shape.resolve(&table);
                    shape.capabilities().any()
                });
                if bearing {
                    table[name].type_validate = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        debug!(rounds, "capability fixpoint reached");

        for (name, decl) in &mut self.declarations {
            decl.capabilities = table[name];
            for field in &mut decl.fields {
                field.shape.resolve(&table);
            }
        }
    }

    /// Looks up an analyzed struct.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    /// The requested declarations followed by every generated-for local
    /// struct they reach, in discovery order.
    ///
    /// A reached struct is included when it bears the type phase and does
    /// not implement it by hand.
    pub fn closure<'a>(&'a self, requested: &[&'a Declaration]) -> Vec<&'a Declaration> {
        let mut seen: HashSet<String> = requested.iter().map(|decl| decl.name()).collect();
        let mut order: Vec<&Declaration> = requested.to_vec();

        let mut next = 0;
        while next < order.len() {
            let current = order[next];
            next += 1;
            for field in &current.fields {
                field.shape.for_each_local(&mut |name| {
                    let Some(decl) = self.declarations.get(name) else {
                        return;
                    };
                    if decl.capabilities.type_validate && !decl.manual && seen.insert(name.to_owned()) {
                        debug!(dependency = name, of = %current.item.ident, "including dependency");
                        order.push(decl);
                    }
                });
            }
        }
        order
    }
}

// ============================================================================
// MARKERS
// ============================================================================

#[derive(Debug, Default)]
struct StructMarkers {
    validate: bool,
    type_validate: bool,
}

impl StructMarkers {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut markers = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("vouch")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("validate") {
                    markers.validate = true;
                } else if meta.path.is_ident("type_validate") {
                    markers.type_validate = true;
                } else if meta.input.peek(Token![=]) {
                    // `crate = "..."` only concerns the derive.
                    meta.value()?.parse::<syn::Expr>()?;
                }
                Ok(())
            })?;
        }
        Ok(markers)
    }
}

#[derive(Debug, Default)]
struct FieldMarkers {
    skip: bool,
    rename: Option<String>,
}

impl FieldMarkers {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut markers = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("vouch")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    markers.skip = true;
                } else if meta.path.is_ident("rename") {
                    markers.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                } else {
                    return Err(meta.error("unknown field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(markers)
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

struct Classifier<'a> {
    module: &'a SourceModule,
    config: &'a GeneratorConfig,
    type_params: HashSet<String>,
}

impl<'a> Classifier<'a> {
    fn new(module: &'a SourceModule, config: &'a GeneratorConfig, item: &ItemStruct) -> Self {
        Self {
            module,
            config,
            type_params: item
                .generics
                .type_params()
                .map(|param| param.ident.to_string())
                .collect(),
        }
    }

    fn classify(&self, ty: &Type) -> Shape {
        self.classify_in(ty, &mut Vec::new())
    }

    /// `aliases` holds the aliases being expanded, to stop on alias cycles.
    fn classify_in(&self, ty: &Type, aliases: &mut Vec<String>) -> Shape {
        match ty {
            Type::Paren(inner) => self.classify_in(&inner.elem, aliases),
            Type::Group(inner) => self.classify_in(&inner.elem, aliases),
            Type::Array(array) => Shape::Sequence(Box::new(self.classify_in(&array.elem, aliases))),
            Type::Slice(slice) => Shape::Sequence(Box::new(self.classify_in(&slice.elem, aliases))),
            Type::Reference(reference) if reference.mutability.is_some() => Shape::Pointer {
                nullable: false,
                inner: Box::new(self.classify_in(&reference.elem, aliases)),
            },
            Type::Tuple(tuple) if !tuple.elems.is_empty() => Shape::Tuple(
                tuple
                    .elems
                    .iter()
                    .map(|elem| self.classify_in(elem, aliases))
                    .collect(),
            ),
            Type::Path(path) => self.classify_path(path, aliases),
            _ => Shape::PLAIN,
        }
    }

    fn classify_path(&self, ty: &TypePath, aliases: &mut Vec<String>) -> Shape {
        if ty.qself.is_some() {
            return Shape::PLAIN;
        }
        let Some(last) = ty.path.segments.last() else {
            return Shape::PLAIN;
        };
        let name = last.ident.to_string();
        let single = ty.path.leading_colon.is_none() && ty.path.segments.len() == 1;

        if single && self.type_params.contains(&name) {
            return Shape::PLAIN;
        }

        let args = type_arguments(&last.arguments);
        let wrap = |arg: &Type, aliases: &mut Vec<String>| Box::new(self.classify_in(arg, aliases));
        match (name.as_str(), args.as_slice()) {
            ("Vec" | "VecDeque" | "LinkedList", [elem]) => {
                return Shape::Sequence(wrap(*elem, aliases));
            }
            ("HashMap" | "BTreeMap" | "IndexMap", [_, value, ..]) => {
                return Shape::Map(wrap(*value, aliases));
            }
            ("Option", [inner]) => {
                return Shape::Pointer {
                    nullable: true,
                    inner: wrap(*inner, aliases),
                };
            }
            ("Box", [inner]) => {
                return Shape::Pointer {
                    nullable: false,
                    inner: wrap(*inner, aliases),
                };
            }
            _ => {}
        }

        if self.config.is_bearing_path(&ty.path) {
            return Shape::Leaf {
                capabilities: Capabilities::TYPE,
                local: None,
            };
        }

        if !single {
            return Shape::PLAIN;
        }

        if let Some(alias) = self.module.get_alias(&name) {
            if !alias.generics.params.is_empty() || aliases.contains(&name) {
                debug!(alias = %name, "alias not expanded");
                return Shape::PLAIN;
            }
            aliases.push(name);
            let shape = self.classify_in(&alias.ty, aliases);
            aliases.pop();
            return shape;
        }

        if self.module.get_struct(&name).is_some() {
            return Shape::Leaf {
                capabilities: Capabilities::NONE,
                local: Some(name),
            };
        }

        Shape::PLAIN
    }
}

fn type_arguments(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
