mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `cas_error::ErrorKind` trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use cas_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of file", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts. The `n`th label points at the `n`th span.           |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression that should evaluate to something implementing
/// [`ToString`]. For structs with named fields, the expression is evaluated with the members of
/// the struct in scope (and `self` available), so they can be used in the expression. Tuple
/// structs are not supported.
///
/// Labels without a matching span are dropped, so errors raised without any source region (for
/// example, from the symbolic engine) render as a message and help text only.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl cas_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
