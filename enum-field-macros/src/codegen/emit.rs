use quote::quote;

use super::analyze::MemberSpec;
use super::parse::EnumerationInput;

// 单个成员的定义调用：显式 object / id / seal 原样转交 Registry::define
fn gen_define_call(host: &syn::Ident, spec: &MemberSpec) -> proc_macro2::TokenStream {
    let name = spec.name.to_string();
    let mut opts = quote! { ::enum_field::options::DefineOptions::<#host>::new() };
    if let Some(obj) = &spec.object {
        opts = quote! { #opts.object(#obj) };
    }
    if let Some(id) = spec.id {
        opts = quote! { #opts.id(#id) };
    }
    if let Some(seal) = spec.seal {
        opts = quote! { #opts.seal(#seal) };
    }
    quote! {
        let _ = ::enum_field::host::__expect_defined(
            __registry.host(),
            __registry.define(#name, #opts),
        );
    }
}

fn gen_accessor(vis: &syn::Visibility, host: &syn::Ident, spec: &MemberSpec) -> proc_macro2::TokenStream {
    let ident = &spec.name;
    let name = ident.to_string();
    let doc = format!("The `{name}` member of `{host}`.");
    quote! {
        #[doc = #doc]
        #[allow(non_snake_case, dead_code)]
        #vis fn #ident() -> &'static ::std::sync::Arc<::enum_field::member::Member<#host>> {
            ::enum_field::host::__accessor::<#host>(#name)
        }
    }
}

pub fn gen_enumeration(input: &EnumerationInput, specs: &[MemberSpec]) -> proc_macro2::TokenStream {
    let EnumerationInput { vis, host, .. } = input;
    let needs_factory = specs.iter().any(|s| s.object.is_none());
    let factory = if needs_factory {
        quote! { .with_factory(::enum_field::factory::DefaultFactory) }
    } else {
        quote! {}
    };
    let defines = specs.iter().map(|s| gen_define_call(host, s));
    let accessors = specs.iter().map(|s| gen_accessor(vis, host, s));
    quote! {
        impl ::enum_field::host::EnumHost for #host {
            fn registry() -> &'static ::enum_field::registry::Registry<Self> {
                static REGISTRY: ::std::sync::OnceLock<::enum_field::registry::Registry<#host>> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| {
                    let mut __registry = ::enum_field::registry::Registry::<#host>::for_host::<#host>() #factory;
                    #( #defines )*
                    __registry
                })
            }
        }

        impl #host {
            #( #accessors )*
        }

        #[doc(hidden)]
        const _: () = {
            fn __type_name() -> &'static str {
                ::std::any::type_name::<#host>()
            }
            fn __names() -> ::std::vec::Vec<&'static str> {
                <#host as ::enum_field::host::EnumHost>::registry()
                    .iter()
                    .map(|m| m.name())
                    .collect()
            }
            fn __len() -> usize {
                <#host as ::enum_field::host::EnumHost>::registry().len()
            }
            ::enum_field::__private::inventory::submit! {
                ::enum_field::catalog::HostEntry { type_name: __type_name, names: __names, len: __len }
            }
        };
    }
}
