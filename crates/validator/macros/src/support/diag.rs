use proc_macro::TokenStream;

/// Renders a `syn::Error` as `compile_error!` invocations.
pub fn to_compile_error(err: syn::Error) -> TokenStream {
    err.to_compile_error().into()
}

/// A `syn::Error` pointing at `tokens`.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Folds `next` into `acc` so every problem is reported in one compile.
pub fn combine(acc: &mut Option<syn::Error>, next: syn::Error) {
    match acc {
        Some(err) => err.combine(next),
        None => *acc = Some(next),
    }
}
