// Copyright 2026 The moo-list Authors
// SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Path, Result};

/// Helper function to derive Record.
///
/// Every deriving structure gets a dedicated `static` guard, which is why generic structures are
/// rejected: a `static` cannot depend on the generic parameters of its surrounding impl.
pub(crate) fn derive_record_trait(input: DeriveInput) -> Result<TokenStream> {
    if !matches!(input.data, Data::Struct(_)) {
        return Err(Error::new_spanned(
            input,
            "Record can only be derived for structs",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            input.generics,
            "Record cannot be derived for generic structs, implement it manually to use the shared guard registry",
        ));
    }

    let ident = &input.ident;
    let init = match parse_init_attr(&input)? {
        Some(path) => quote! { #path() },
        None => quote! { <Self as ::core::default::Default>::default() },
    };

    Ok(quote! {
        impl ::moo_list::record::Record for #ident {
            fn init() -> Self {
                #init
            }

            fn guard() -> &'static ::moo_list::record::CallGuard {
                static GUARD: ::moo_list::record::CallGuard = ::moo_list::record::CallGuard::new();
                &GUARD
            }
        }
    })
}

/// Returns the initializer named by a `#[record(init = path)]` attribute, if any.
///
/// The attribute may be split over multiple `record` attributes, but `init` may only appear once.
fn parse_init_attr(input: &DeriveInput) -> Result<Option<Path>> {
    let mut init = None;

    for attr in input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("record"))
    {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("init") {
                return Err(meta.error("unsupported record attribute, expected `init`"));
            }

            if init.is_some() {
                return Err(meta.error("duplicate `init` argument"));
            }

            init = Some(meta.value()?.parse::<Path>()?);
            Ok(())
        })?;
    }

    Ok(init)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    /// Renders the derive output without whitespace, so that checks don't depend on token spacing.
    fn expand(input: DeriveInput) -> String {
        derive_record_trait(input)
            .unwrap()
            .to_string()
            .split_whitespace()
            .collect()
    }

    fn expect_error(input: DeriveInput, message: &str) {
        let error = derive_record_trait(input).unwrap_err();
        assert!(
            error.to_string().contains(message),
            "unexpected error: {}",
            error
        );
    }

    #[test]
    fn test_default_initializer() {
        let output = expand(parse_quote! {
            struct Counter {
                value: u32,
            }
        });

        assert!(output.contains("impl::moo_list::record::RecordforCounter"));
        assert!(output.contains("<Selfas::core::default::Default>::default()"));
        assert!(output.contains("staticGUARD:::moo_list::record::CallGuard"));
    }

    #[test]
    fn test_named_initializer() {
        let output = expand(parse_quote! {
            #[record(init = Settings::with_defaults)]
            struct Settings {
                retries: u8,
            }
        });

        assert!(output.contains("fninit()->Self{Settings::with_defaults()}"));
        assert!(!output.contains("Default"));
    }

    #[test]
    fn test_reject_enum() {
        expect_error(
            parse_quote! {
                enum Choice {
                    A,
                    B,
                }
            },
            "Record can only be derived for structs",
        );
    }

    #[test]
    fn test_reject_generic_struct() {
        expect_error(
            parse_quote! {
                struct Wrapper<T> {
                    inner: T,
                }
            },
            "Record cannot be derived for generic structs",
        );
    }

    #[test]
    fn test_reject_unknown_argument() {
        expect_error(
            parse_quote! {
                #[record(drop = cleanup)]
                struct Settings;
            },
            "unsupported record attribute",
        );
    }

    #[test]
    fn test_reject_duplicate_init() {
        expect_error(
            parse_quote! {
                #[record(init = first)]
                #[record(init = second)]
                struct Settings;
            },
            "duplicate `init` argument",
        );
    }
}
