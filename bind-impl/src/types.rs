use quote::ToTokens;

/////////////////////////////////////////////////////////////////////////////////////////

/// Whether a tagged field should be fetched from the catalog as an `Arc<Inner>`
/// (identity-preserving) or as a plain value (cloned out of the resolved `Arc`).
pub(crate) enum InjectionType {
    Arc { inner: syn::Type },
    Value { typ: syn::Type },
}

pub(crate) fn deduce_injection_type(typ: &syn::Type) -> InjectionType {
    if is_smart_ptr(typ) {
        InjectionType::Arc {
            inner: strip_smart_ptr(typ),
        }
    } else {
        InjectionType::Value { typ: typ.clone() }
    }
}

/////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn is_smart_ptr(typ: &syn::Type) -> bool {
    let syn::Type::Path(typepath) = typ else {
        return false;
    };

    if typepath.qself.is_some() || typepath.path.segments.len() != 1 {
        return false;
    }

    &typepath.path.segments[0].ident == "Arc"
}

pub(crate) fn strip_smart_ptr(typ: &syn::Type) -> syn::Type {
    match typ {
        syn::Type::Path(typepath) if typepath.qself.is_none() => {
            match typepath.path.segments.first() {
                Some(seg) if &seg.ident == "Arc" => match seg.arguments {
                    syn::PathArguments::AngleBracketed(ref args) => {
                        syn::parse2(args.args.to_token_stream()).unwrap()
                    }
                    _ => typ.clone(),
                },
                _ => typ.clone(),
            }
        }
        _ => typ.clone(),
    }
}
