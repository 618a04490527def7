use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Path, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed `#[vouch(...)]` arguments, merged across repeated attributes.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `skip` or `validate`
    Flag(Ident),
    /// Key-value pair like `rename = "id"`
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Get a string literal by key.
    pub fn get_str(&self, key: &str) -> Result<Option<&LitStr>> {
        let Some(value) = self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        }) else {
            return Ok(None);
        };

        match value {
            Lit::Str(s) => Ok(Some(s)),
            other => Err(diag::error_spanned(
                other,
                format!("expected a string literal for `{key}`"),
            )),
        }
    }

    /// Parse a path from a string value like `crate = "::my::validator"`.
    pub fn get_path(&self, key: &str) -> Result<Option<Path>> {
        self.get_str(key)?
            .map(|s| {
                s.parse::<Path>()
                    .map_err(|e| diag::error_spanned(s, format!("invalid path for `{key}`: {e}")))
            })
            .transpose()
    }

    /// Rejects every item whose key is not in `flags` (bare) or `values`
    /// (`key = "..."`), and repeated keys.
    pub fn ensure_known(&self, flags: &[&str], values: &[&str], position: &str) -> Result<()> {
        let mut errors = None;
        let mut seen: Vec<String> = Vec::new();

        for item in &self.items {
            let key = item.key();
            let name = key.unraw().to_string();
            let known = match item {
                AttrItem::Flag(_) => flags.contains(&name.as_str()),
                AttrItem::KeyValue { .. } => values.contains(&name.as_str()),
            };
            if !known {
                let shape = match item {
                    AttrItem::Flag(_) => format!("`{name}`"),
                    AttrItem::KeyValue { .. } => format!("`{name} = ...`"),
                };
                diag::combine(
                    &mut errors,
                    diag::error_spanned(key, format!("unknown {position} attribute {shape}")),
                );
            } else if seen.contains(&name) {
                diag::combine(
                    &mut errors,
                    diag::error_spanned(key, format!("duplicate attribute `{name}`")),
                );
            }
            seen.push(name);
        }

        errors.map_or(Ok(()), Err)
    }
}

/// Parse one attribute if it is `#[<expected>(...)]`.
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        other => Err(diag::error_spanned(
            other,
            format!("expected #[{expected}(...)]"),
        )),
    }
}

/// Parse all attributes of a given name and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        // `crate` is a keyword, so plain `Ident` parsing would refuse it.
        let key = Ident::parse_any(input)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(tokens: proc_macro2::TokenStream) -> AttrArgs {
        syn::parse2::<AttrArgsParser>(tokens).unwrap().0
    }

    #[test]
    fn flags_and_values() {
        let args = parse(quote!(skip, rename = "id"));

        assert_eq!(args.items.len(), 2);
        assert!(args.has_flag("skip"));
        assert_eq!(args.get_str("rename").unwrap().unwrap().value(), "id");
    }

    #[test]
    fn crate_keyword_is_a_key() {
        let args = parse(quote!(crate = "::renamed"));
        let path = args.get_path("crate").unwrap().unwrap();

        assert!(path.leading_colon.is_some());
        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].ident, "renamed");
    }

    #[test]
    fn unknown_and_duplicate_keys_are_rejected() {
        let args = parse(quote!(skip, skip, bogus));
        let err = args.ensure_known(&["skip"], &["rename"], "field").unwrap_err();
        let messages: Vec<String> = err.into_iter().map(|e| e.to_string()).collect();

        assert_eq!(
            messages,
            ["duplicate attribute `skip`", "unknown field attribute `bogus`"]
        );
    }

    #[test]
    fn non_string_value_is_an_error() {
        let args = parse(quote!(rename = 3));
        assert!(args.get_str("rename").is_err());
    }

    #[test]
    fn empty_list_parses() {
        assert!(parse(quote!()).items.is_empty());
    }
}
