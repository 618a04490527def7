//! Fresh identifiers and value places for emitted code.

use std::collections::HashMap;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::Member;

/// Per-prefix counters: `i1, i2, ...`, `k1, ...`, `v1, ...`. One instance
/// lives for a whole generator run, so names never repeat in an artifact.
#[derive(Debug, Default)]
pub(crate) struct Names {
    counters: HashMap<&'static str, usize>,
}

impl Names {
    pub(crate) fn fresh(&mut self, prefix: &'static str) -> Ident {
        let counter = self.counters.entry(prefix).or_default();
        *counter += 1;
        format_ident!("{}{}", prefix, *counter)
    }
}

/// A place expression naming the value being emitted for.
///
/// When the place is `*binding` for a reference produced by a loop or an
/// `if let`, the binding itself is used wherever a reference is needed.
#[derive(Debug, Clone)]
pub(crate) struct Place {
    tokens: TokenStream,
    binding: Option<Ident>,
    deref: bool,
}

impl Place {
    /// `self`.
    pub(crate) fn receiver() -> Self {
        Self {
            tokens: quote!(self),
            binding: None,
            deref: false,
        }
    }

    /// `*binding`, where `binding` is already a reference.
    pub(crate) fn behind(binding: Ident) -> Self {
        Self {
            tokens: quote!(*#binding),
            binding: Some(binding),
            deref: true,
        }
    }

    /// `place.member`.
    pub(crate) fn member(&self, member: &Member) -> Self {
        let base = self.method_receiver();
        Self {
            tokens: quote!(#base.#member),
            binding: None,
            deref: false,
        }
    }

    /// `*place`, for `Box` and `&mut` fields.
    pub(crate) fn deref(&self) -> Self {
        let tokens = &self.tokens;
        Self {
            tokens: quote!(*#tokens),
            binding: None,
            deref: true,
        }
    }

    /// A reference to the place, mutable or shared.
    pub(crate) fn reference(&self, mutable: bool) -> TokenStream {
        if let Some(binding) = &self.binding {
            return quote!(#binding);
        }
        let tokens = &self.tokens;
        if mutable {
            quote!(&mut #tokens)
        } else {
            quote!(&#tokens)
        }
    }

    /// The place in method-call or field-access position.
    pub(crate) fn method_receiver(&self) -> TokenStream {
        if let Some(binding) = &self.binding {
            return quote!(#binding);
        }
        let tokens = &self.tokens;
        if self.deref {
            quote!((#tokens))
        } else {
            tokens.clone()
        }
    }

    /// Whether [`reference`](Self::reference) yields an existing binding.
    pub(crate) fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(tokens: TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn counters_are_per_prefix() {
        let mut names = Names::default();
        let got: Vec<String> = ["i", "v", "i", "err", "v"]
            .into_iter()
            .map(|prefix| names.fresh(prefix).to_string())
            .collect();
        assert_eq!(got, ["i1", "v1", "i2", "err1", "v2"]);
    }

    #[test]
    fn places_compose() {
        let field = Place::receiver().member(&syn::parse_quote!(inner));
        assert_eq!(render(field.reference(true)), "&mutself.inner");

        let boxed = field.deref();
        assert_eq!(render(boxed.reference(false)), "&*self.inner");
        assert_eq!(render(boxed.member(&syn::parse_quote!(0)).reference(true)), "&mut(*self.inner).0");

        let bound = Place::behind(format_ident!("v1"));
        assert_eq!(render(bound.reference(true)), "v1");
        assert_eq!(render(bound.member(&syn::parse_quote!(name)).reference(true)), "&mutv1.name");
        assert_eq!(render(bound.deref().reference(true)), "&mut**v1");
    }
}
