//! Code emission for one declaration.
//!
//! The emitted `type_validate` body mirrors the Walker: a type pass calling
//! `TypeValidate` on every bearing leaf in declaration order, then a cross
//! pass calling `Validate` on every leaf marked for it. Both passes stop at
//! the first error and attach the leaf's path.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use tracing::debug;

use crate::ident::{Names, Place};
use crate::schema::{Declaration, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Type,
    Cross,
}

impl Pass {
    fn wants(self, shape: &Shape) -> bool {
        let capabilities = shape.capabilities();
        match self {
            Self::Type => capabilities.type_validate,
            Self::Cross => capabilities.validate,
        }
    }

    fn mutable(self) -> bool {
        self == Self::Type
    }
}

/// A path segment as known at generation time.
#[derive(Debug, Clone)]
enum Part {
    Field(String),
    /// Bound to a `usize` loop counter.
    Index(Ident),
    /// Bound to a `&K` map key.
    Key(Ident),
}

pub(crate) struct Emitter<'a> {
    krate: &'a syn::Path,
    names: &'a mut Names,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(krate: &'a syn::Path, names: &'a mut Names) -> Self {
        Self { krate, names }
    }

    /// `impl TypeValidate for <decl>`.
    pub(crate) fn type_validate_impl(&mut self, decl: &Declaration) -> TokenStream {
        let krate = self.krate;
        let ident = &decl.item.ident;
        let (impl_generics, ty_generics, where_clause) = decl.item.generics.split_for_impl();

        let mut body = Vec::new();
        for pass in [Pass::Type, Pass::Cross] {
            for field in &decl.fields {
                if !pass.wants(&field.shape) {
                    continue;
                }
                debug!(declaration = %ident, field = %field.name, ?pass, "emitting field");
                let place = Place::receiver().member(&field.member);
                let path = vec![Part::Field(field.name.clone())];
                self.shape(pass, &field.shape, &place, &path, &mut body);
            }
        }

        let doc = format!(" Type phase of every field of [`{ident}`], then their cross-field hooks.");
        quote! {
            #[doc = #doc]
            impl #impl_generics #krate::TypeValidate for #ident #ty_generics #where_clause {
                fn type_validate(&mut self) -> ::core::result::Result<(), #krate::ValidationError> {
                    #(#body)*
                    ::core::result::Result::Ok(())
                }
            }
        }
    }

    /// `impl Reflect for <decl>`: an opaque node exposing the generated
    /// capability, and `Validate` if the declaration is marked for it.
    pub(crate) fn reflect_impl(&self, decl: &Declaration) -> TokenStream {
        let krate = self.krate;
        let ident = &decl.item.ident;
        let (impl_generics, ty_generics, where_clause) = decl.item.generics.split_for_impl();

        let as_validate = decl.capabilities.validate.then(|| {
            quote! {
                fn as_validate(&self) -> ::core::option::Option<&dyn #krate::Validate> {
                    ::core::option::Option::Some(self)
                }
            }
        });

        quote! {
            impl #impl_generics #krate::Reflect for #ident #ty_generics #where_clause {
                fn as_type_validate(&mut self) -> ::core::option::Option<&mut dyn #krate::TypeValidate> {
                    ::core::option::Option::Some(self)
                }

                #as_validate
            }
        }
    }

    fn shape(
        &mut self,
        pass: Pass,
        shape: &Shape,
        place: &Place,
        path: &[Part],
        out: &mut Vec<TokenStream>,
    ) {
        if !pass.wants(shape) {
            return;
        }

        let mutable = pass.mutable();
        match shape {
            Shape::Leaf { .. } => out.push(self.leaf(pass, place, path)),
            Shape::Sequence(inner) => {
                let index = self.names.fresh("i");
                let value = self.names.fresh("v");
                let receiver = place.method_receiver();
                let iter = if mutable { quote!(iter_mut) } else { quote!(iter) };

                let mut body = Vec::new();
                let path = extend(path, Part::Index(index.clone()));
                self.shape(pass, inner, &Place::behind(value.clone()), &path, &mut body);

                out.push(quote! {
                    for (#index, #value) in #receiver.#iter().enumerate() {
                        #(#body)*
                    }
                });
            }
            Shape::Map(inner) => {
                let key = self.names.fresh("k");
                let value = self.names.fresh("v");
                let receiver = place.method_receiver();
                let iter = if mutable { quote!(iter_mut) } else { quote!(iter) };

                let mut body = Vec::new();
                let path = extend(path, Part::Key(key.clone()));
                self.shape(pass, inner, &Place::behind(value.clone()), &path, &mut body);

                out.push(quote! {
                    for (#key, #value) in #receiver.#iter() {
                        #(#body)*
                    }
                });
            }
            Shape::Pointer {
                nullable: true,
                inner,
            } => {
                let pointer = self.names.fresh("p");
                let reference = if place.is_bound() {
                    let binding = place.method_receiver();
                    if mutable {
                        quote!(&mut *#binding)
                    } else {
                        quote!(&*#binding)
                    }
                } else {
                    place.reference(mutable)
                };

                let mut body = Vec::new();
                self.shape(pass, inner, &Place::behind(pointer.clone()), path, &mut body);

                out.push(quote! {
                    if let ::core::option::Option::Some(#pointer) = #reference {
                        #(#body)*
                    }
                });
            }
            Shape::Pointer {
                nullable: false,
                inner,
            } => self.shape(pass, inner, &place.deref(), path, out),
            Shape::Tuple(items) => {
                for (position, item) in items.iter().enumerate() {
                    let member = syn::Member::Unnamed(position.into());
                    let path = extend(path, Part::Field(position.to_string()));
                    self.shape(pass, item, &place.member(&member), &path, out);
                }
            }
        }
    }

    fn leaf(&mut self, pass: Pass, place: &Place, path: &[Part]) -> TokenStream {
        let krate = self.krate;
        let err = self.names.fresh("err");
        let path = self.path(path);

        let (binding, value) = if place.is_bound() {
            (None, place.reference(pass.mutable()))
        } else {
            let value = self.names.fresh("v");
            let reference = place.reference(pass.mutable());
            (Some(quote!(let #value = #reference;)), quote!(#value))
        };

        let (call, wrap) = match pass {
            Pass::Type => (
                quote!(#krate::TypeValidate::type_validate(#value)),
                quote!(#err.within(&#path)),
            ),
            Pass::Cross => (
                quote!(#krate::Validate::validate(#value)),
                quote!(#err.into_cross_field().within(&#path)),
            ),
        };

        quote! {
            #binding
            if let ::core::result::Result::Err(#err) = #call {
                return ::core::result::Result::Err(#wrap);
            }
        }
    }

    /// A `FieldPath` builder chain: literals for static segments, loop
    /// bindings for dynamic ones.
    fn path(&self, parts: &[Part]) -> TokenStream {
        let krate = self.krate;
        let segments = parts.iter().map(|part| match part {
            Part::Field(name) => quote!(.field(#name)),
            Part::Index(index) => quote!(.index(&#index)),
            Part::Key(key) => quote!(.index(#key)),
        });
        quote!(#krate::FieldPath::root() #(#segments)*)
    }
}

fn extend(path: &[Part], part: Part) -> Vec<Part> {
    let mut path = path.to_vec();
    path.push(part);
    path
}
