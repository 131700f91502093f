use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Fields, ItemFn, ItemStruct};

const CONTENT_DERIVES: [&str; 6] =
    ["Debug", "Clone", "PartialEq", "Eq", "Serialize", "Deserialize"];

/// Expands the `#[content_model]` attribute macro.
pub fn expand_content_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "content_model takes no arguments")
            .to_compile_error();
    }
    if !matches!(input.fields, Fields::Named(_)) {
        return syn::Error::new_spanned(
            &input.ident,
            "content_model requires a struct with named fields",
        )
        .to_compile_error();
    }

    let derives = derived_trait_names(&input.attrs);
    let missing = CONTENT_DERIVES.iter().filter(|name| !derives.contains(**name)).map(|name| {
        match *name {
            "Serialize" => quote! { ::serde::Serialize },
            "Deserialize" => quote! { ::serde::Deserialize },
            other => {
                let ident = syn::Ident::new(other, proc_macro2::Span::call_site());
                quote! { #ident }
            },
        }
    });
    let missing: Vec<TokenStream> = missing.collect();

    let derive_attr = if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    };
    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    quote! {
        #derive_attr
        #schema_attr
        #input
    }
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return syn::Error::new_spanned(&input.sig.ident, "api_handler expects an async fn")
            .to_compile_error();
    }

    let body = &input.block;
    let sig = &input.sig;
    let vis = &input.vis;
    let attrs = &input.attrs;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #body
    }
}
