//! # vouch-validator-macros
//!
//! `#[derive(Reflect)]` for vouch-validator. Re-exported as
//! `vouch_validator::Reflect`; depend on this crate directly only when the
//! runtime crate is renamed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod reflect;
mod support;

/// Derive macro for the `Reflect` trait.
///
/// Structs present their fields to the visitor in declaration order; tuple
/// structs use `"0"`, `"1"`, ... as field names. Enums present the fields of
/// the active variant. Type parameters get a `Reflect` bound.
///
/// # Attributes
///
/// ## Container attributes (`#[vouch(...)]` on the type)
///
/// - `validate` - the type implements `Validate`; the Walker defers its hook
///   to the cross phase
/// - `type_validate` - the type implements `TypeValidate`
/// - `crate = "path"` - path to the runtime crate (default:
///   `::vouch_validator`)
///
/// ## Field attributes (`#[vouch(...)]` on a field)
///
/// - `skip` - never visit the field
/// - `rename = "name"` - name used in error paths
///
/// # Example
///
/// ```ignore
/// #[derive(Reflect)]
/// #[vouch(validate)]
/// struct Range {
///     #[vouch(rename = "from")]
///     start: required::Any<u32>,
///     end: required::Any<u32>,
///     #[vouch(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(vouch))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive(input)
}
