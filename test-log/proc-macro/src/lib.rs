//! The attribute macro behind `sundry_test_log::test`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn, ReturnType};

/// A replacement for the `#[test]` attribute that initializes the test
/// logging subscriber before the test body runs.
///
/// ```rust,ignore
/// use sundry_test_log::test;
///
/// #[test]
/// fn it_still_works() {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[sundry_test_log::test] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let name = &input.sig.ident;
    let body = &input.block;
    // A #[should_panic] test cannot have a non-unit return value, so the
    // return type is passed through untouched.
    let ret = match &input.sig.output {
        ReturnType::Default => quote! {},
        ReturnType::Type(_, ty) => quote! { -> #ty },
    };

    quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        fn #name() #ret {
            fn test_impl() #ret #body

            ::sundry_test_log::initialize();

            test_impl()
        }
    }
    .into()
}
