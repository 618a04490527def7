use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, Index, Member, Path, ext::IdentExt, parse_macro_input, parse_quote,
};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

struct ContainerAttrs {
    validate: bool,
    type_validate: bool,
    krate: Path,
}

impl ContainerAttrs {
    fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let args = attrs::parse_attrs(&input.attrs, "vouch")?;
        args.ensure_known(&["validate", "type_validate"], &["crate"], "container")?;

        Ok(Self {
            validate: args.has_flag("validate"),
            type_validate: args.has_flag("type_validate"),
            krate: args
                .get_path("crate")?
                .unwrap_or_else(|| parse_quote!(::vouch_validator)),
        })
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let container = ContainerAttrs::parse(&input)?;
    let krate = &container.krate;

    let body = match &input.data {
        Data::Struct(data) => {
            let (pattern, visits) = destructure(&data.fields, krate)?;
            quote! {
                let Self #pattern = self;
                #(#visits)*
            }
        }
        Data::Enum(data) if data.variants.is_empty() => quote! { match *self {} },
        Data::Enum(data) => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                attrs::parse_attrs(&variant.attrs, "vouch")?.ensure_known(&[], &[], "variant")?;
                let ident = &variant.ident;
                let (pattern, visits) = destructure(&variant.fields, krate)?;
                arms.push(quote! {
                    Self::#ident #pattern => {
                        #(#visits)*
                    }
                });
            }
            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Reflect cannot be derived for unions",
            ));
        }
    };

    let type_params: Vec<_> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #krate::Reflect));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let as_validate = container.validate.then(|| {
        quote! {
            fn as_validate(&self) -> ::core::option::Option<&dyn #krate::Validate> {
                ::core::option::Option::Some(self)
            }
        }
    });
    let as_type_validate = container.type_validate.then(|| {
        quote! {
            fn as_type_validate(&mut self) -> ::core::option::Option<&mut dyn #krate::TypeValidate> {
                ::core::option::Option::Some(self)
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Reflect for #name #ty_generics #where_clause {
            fn kind(&self) -> #krate::Kind {
                #krate::Kind::Struct
            }

            #[allow(unused_variables)]
            fn reflect(
                &mut self,
                visitor: &mut dyn #krate::Visitor,
            ) -> ::core::result::Result<(), #krate::ValidationError> {
                #body
                ::core::result::Result::Ok(())
            }

            #as_validate
            #as_type_validate
        }
    })
}

/// Builds a braced pattern binding every visited field, and one
/// `visit_field` call per binding.
///
/// Braced patterns work for named, tuple and unit shapes alike
/// (`S { 0: a, .. }`), so structs and variants share this code.
fn destructure(fields: &Fields, krate: &Path) -> syn::Result<(TokenStream2, Vec<TokenStream2>)> {
    let mut bindings = Vec::new();
    let mut visits = Vec::new();
    let mut errors = None;

    for (position, field) in fields.iter().enumerate() {
        let args = match attrs::parse_attrs(&field.attrs, "vouch") {
            Ok(args) => args,
            Err(e) => {
                diag::combine(&mut errors, e);
                continue;
            }
        };
        if let Err(e) = args.ensure_known(&["skip"], &["rename"], "field") {
            diag::combine(&mut errors, e);
            continue;
        }
        if args.has_flag("skip") {
            continue;
        }

        let (member, default_name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(position)), position.to_string()),
        };
        let name = match args.get_str("rename") {
            Ok(Some(lit)) => lit.value(),
            Ok(None) => default_name,
            Err(e) => {
                diag::combine(&mut errors, e);
                continue;
            }
        };

        let binding = format_ident!("__vouch_field_{}", position);
        bindings.push(quote! { #member: #binding });
        visits.push(quote! {
            #krate::Visitor::visit_field(&mut *visitor, #name, #binding)?;
        });
    }

    if let Some(err) = errors {
        return Err(err);
    }

    Ok((quote! { { #(#bindings,)* .. } }, visits))
}
