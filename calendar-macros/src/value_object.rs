use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Item, ItemStruct, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input,
};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：(Debug 可控), Clone, PartialEq, Eq, Hash, Serialize
/// - `string` 参数仅适用于单字段 tuple struct
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
        syn::parse_quote!(serde::Serialize),
    ];

    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);

            let extra = if cfg.string {
                match string_accessors(st) {
                    Ok(tokens) => tokens,
                    Err(err) => return err.to_compile_error().into(),
                }
            } else {
                TokenStream2::new()
            };

            TokenStream::from(quote! { #st #extra })
        }
        Item::Enum(en) => {
            if cfg.string {
                return syn::Error::new(en.span(), "'string' only supports tuple structs")
                    .to_compile_error()
                    .into();
            }
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

// 为 `struct X(String);` 生成只读的字符串访问器
fn string_accessors(st: &ItemStruct) -> Result<TokenStream2> {
    match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => {}
        _ => {
            return Err(syn::Error::new(
                st.span(),
                "'string' requires a tuple struct with exactly one String field",
            ));
        }
    }

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.0.as_str())
            }
        }

        impl #impl_generics ::core::convert::AsRef<str> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for ::std::string::String #where_clause {
            fn from(value: #ident #ty_generics) -> Self {
                value.0
            }
        }
    })
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: Option<bool>,
    string: bool,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug: Option<bool> = None;
        let mut string = false;

        if input.is_empty() {
            return Ok(Self {
                derive_debug,
                string,
            });
        }

        let elems: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in elems {
            match elem {
                ValueObjectAttrElem::Debug(span, b) => {
                    if derive_debug.is_some() {
                        return Err(syn::Error::new(span, "duplicate key 'debug' in attribute"));
                    }
                    derive_debug = Some(b);
                }
                ValueObjectAttrElem::String(span) => {
                    if string {
                        return Err(syn::Error::new(span, "duplicate key 'string' in attribute"));
                    }
                    string = true;
                }
            }
        }

        Ok(Self {
            derive_debug,
            string,
        })
    }
}

enum ValueObjectAttrElem {
    Debug(proc_macro2::Span, bool),
    String(proc_macro2::Span),
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;

        if key == "string" {
            return Ok(Self::String(key.span()));
        }

        if key == "debug" {
            let _eq: Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            return match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => Ok(Self::Debug(key.span(), b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            };
        }

        Err(syn::Error::new(
            key.span(),
            "unknown key in attribute; expected 'debug' | 'string'",
        ))
    }
}
