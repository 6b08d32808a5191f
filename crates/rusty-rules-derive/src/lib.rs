// rusty-rules Procedural Macros
// Provides #[derive(Reflect)] with #[validate("rule:param")] field annotations

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod reflect;

/// Derive macro for the `Reflect` trait
///
/// Produces a record whose readable fields are the struct's `pub` fields and
/// whose rule schema holds every `#[validate(...)]` annotation.
///
/// # Example
///
/// ```ignore
/// #[derive(Reflect)]
/// pub struct Member {
///     #[validate("len:8")]
///     pub id: String,
///
///     #[validate("in:admin,editor,viewer")]
///     pub roles: Vec<String>,
///
///     #[validate = "min:0"]
///     pub karma: i64,
///
///     // not reflected; annotating it makes validation fail as a whole
///     password_hash: String,
/// }
/// ```
///
/// # Annotations
///
/// - `#[validate("len:N")]` - exact string length
/// - `#[validate("min:N")]` - lower bound (value or string length)
/// - `#[validate("max:N")]` - upper bound (value or string length)
/// - `#[validate("in:a,b,c")]` - allowed values
///
/// One annotation per field. Non-`pub` fields do not need to implement
/// `Reflect`; on generic structs only the types of `pub` fields are bounded.
#[proc_macro_derive(Reflect, attributes(validate))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::impl_reflect(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
