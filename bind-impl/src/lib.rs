extern crate proc_macro;

mod types;

use proc_macro::TokenStream;
use quote::quote;
use types::InjectionType;

/////////////////////////////////////////////////////////////////////////////////////////

/// Generates an `Injectable` impl for a struct.
///
/// Fields tagged `#[bind]` (default scope) or `#[bind(scope = "...")]` are
/// resolved from the catalog when the type is constructed; all other fields
/// are left at their `Default::default()` value.
#[proc_macro_attribute]
pub fn injectable(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast: syn::ItemStruct = match syn::parse(item) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    implement_injectable(ast)
}

/////////////////////////////////////////////////////////////////////////////////////////

fn implement_injectable(ast: syn::ItemStruct) -> TokenStream {
    let struct_name = &ast.ident;

    let fields: Vec<_> = match &ast.fields {
        syn::Fields::Named(named) => named.named.iter().collect(),
        syn::Fields::Unit => Vec::new(),
        syn::Fields::Unnamed(_) => {
            panic!("#[injectable] only supports structs with named fields or unit structs")
        }
    };

    let mut construct_lets = Vec::new();
    let mut construct_field_names = Vec::new();
    let mut inject_assigns = Vec::new();

    for field in &fields {
        let name = field.ident.as_ref().expect("named field");
        let typ = &field.ty;

        match get_bind_scope(&field.attrs) {
            Some(scope) => {
                let fetch = fetch_expr(typ, &scope);
                construct_lets.push(quote! { let #name = #fetch; });
                inject_assigns.push(quote! { self.#name = #fetch; });
            }
            None => {
                construct_lets.push(quote! {
                    let #name = <#typ as ::std::default::Default>::default();
                });
            }
        }

        construct_field_names.push(name);
    }

    let ctor = match &ast.fields {
        syn::Fields::Unit => quote! { #struct_name },
        _ => quote! {
            #struct_name {
                #( #construct_field_names: #construct_field_names, )*
            }
        },
    };

    let gen = quote! {
        #ast

        impl ::bind::Injectable for #struct_name {
            fn construct(catalog: &::bind::Catalog) -> ::std::result::Result<Self, ::bind::InjectionError> {
                #( #construct_lets )*
                Ok(#ctor)
            }

            fn inject_fields(&mut self, catalog: &::bind::Catalog) -> ::std::result::Result<(), ::bind::InjectionError> {
                #( #inject_assigns )*
                Ok(())
            }
        }
    };

    gen.into()
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Builds the catalog-fetch expression for a tagged field's type, returning
/// `Arc<T>` bound fields untouched and cloning value-typed fields out of the
/// resolved `Arc`.
fn fetch_expr(typ: &syn::Type, scope: &str) -> proc_macro2::TokenStream {
    match types::deduce_injection_type(typ) {
        InjectionType::Arc { inner } => quote! {
            catalog.resolve::<#inner>(#scope)?
        },
        InjectionType::Value { typ } => quote! {
            (*catalog.resolve::<#typ>(#scope)?).clone()
        },
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

/// Searches for a `#[bind]` or `#[bind(scope = "...")]` attribute on a field.
/// Returns `Some(scope)` (empty string for the default scope) if present.
fn get_bind_scope(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }

        if let syn::Meta::Path(_) = &attr.meta {
            return Some(String::new());
        }

        let mut scope = String::new();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("scope") {
                let value = meta.value()?;
                let lit: syn::LitStr = value.parse()?;
                scope = lit.value();
            }
            Ok(())
        })
        .unwrap();
        return Some(scope);
    }

    None
}
