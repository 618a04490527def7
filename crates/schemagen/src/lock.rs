//! Shape lock: a compile-time check that a struct still has exactly the
//! fields, with the same types, that its generated code was produced from.
//!
//! The lock destructures a borrowed struct without `..` (so adding or
//! removing a field fails) and hands every binding to `__exact::<_, Ty>`,
//! which only accepts a reference whose pointee *is* `Ty`. A plain
//! `let _: &Ty = binding;` would still accept `Box<Ty>` through deref
//! coercion. Borrowing keeps the lock valid for `Drop` types.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct, Member};

pub(crate) fn shape_lock(item: &ItemStruct) -> TokenStream {
    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let members: Vec<Member> = match &item.fields {
        Fields::Named(fields) => fields
            .named
            .iter()
            .filter_map(|field| field.ident.clone().map(Member::Named))
            .collect(),
        Fields::Unnamed(fields) => (0..fields.unnamed.len()).map(|i| Member::Unnamed(i.into())).collect(),
        Fields::Unit => Vec::new(),
    };
    let bindings: Vec<_> = (0..members.len()).map(|i| format_ident!("f{}", i)).collect();
    let types = item.fields.iter().map(|field| &field.ty);

    let doc = format!(" Stops compiling when the fields of [`{ident}`] change; re-run schemagen.");
    quote! {
        #[allow(dead_code)]
        const _: () = {
            trait __Exact<T: ?Sized> {}
            impl<T: ?Sized> __Exact<T> for T {}
            // `A` is inferred from the argument, so no coercion can apply.
            fn __exact<A: ?Sized + __Exact<B>, B: ?Sized>(_: &A) {}

            #[doc = #doc]
            fn lock #impl_generics (value: &#ident #ty_generics) #where_clause {
                let #ident { #(#members: #bindings),* } = value;
                #(__exact::<_, #types>(#bindings);)*
            }
        };
    }
}
