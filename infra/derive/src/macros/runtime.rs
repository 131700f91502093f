use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

enum Profile {
    Default,
    HighPerformance,
    MemoryEfficient,
}

impl Profile {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        if args.is_empty() {
            return Ok(Self::Default);
        }
        let ident: Ident = syn::parse2(args)?;
        match ident.to_string().as_str() {
            "default" => Ok(Self::Default),
            "high_performance" => Ok(Self::HighPerformance),
            "memory_efficient" => Ok(Self::MemoryEfficient),
            _ => Err(Error::new_spanned(
                ident,
                "Unknown runtime profile. Use: high_performance, memory_efficient, or default",
            )),
        }
    }

    fn config_expr(&self) -> TokenStream {
        match self {
            Self::Default => quote! { ::dumps_runtime::RuntimeConfig::default() },
            Self::HighPerformance => quote! { ::dumps_runtime::RuntimeConfig::high_performance() },
            Self::MemoryEfficient => quote! { ::dumps_runtime::RuntimeConfig::memory_efficient() },
        }
    }
}

/// Expands the `#[dumps_runtime::main]` attribute macro.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if let Err(err) = validate_signature(&input) {
        return err.to_compile_error();
    }
    let profile = match Profile::parse(args) {
        Ok(profile) => profile,
        Err(err) => return err.to_compile_error(),
    };

    let config = profile.config_expr();
    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #config;
            let rt = ::dumps_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn validate_signature(input: &ItemFn) -> syn::Result<()> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            &input.sig.ident,
            "#[dumps_runtime::main] can only be used on async functions",
        ));
    }
    if !input.sig.inputs.is_empty() {
        return Err(Error::new_spanned(&input.sig.inputs, "main must not take arguments"));
    }

    let returns_result = match &input.sig.output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => path.path.segments.last().is_some_and(|s| s.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    };
    if !returns_result {
        return Err(Error::new_spanned(
            &input.sig.output,
            "#[dumps_runtime::main] requires a Result return type",
        ));
    }

    Ok(())
}
