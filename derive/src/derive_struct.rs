use proc_macro2::TokenStream;
use quote::quote;

use crate::parse_type::{CommonDerivedTypeInfo, NamedFields};

pub fn generate_derive_struct_impl(info: CommonDerivedTypeInfo, fields: NamedFields) -> TokenStream {
    let CommonDerivedTypeInfo {
        impl_trait_tokens,
        deny_unknown_fields,
    } = info;

    let construct = generate_named_fields(&fields, deny_unknown_fields, None, quote! { Self });

    quote! {
        #impl_trait_tokens {
            fn decode(__decoder: &codable_json::Decoder) -> codable_json::Result<Self> {
                let __container = __decoder.keyed_container()?;
                #construct
            }
        }
    }
}

/// Statements decoding every field of `fields` out of `__container`,
/// ending in an `Ok(#path { .. })` expression.
///
/// `tag` is an extra member name that is accepted when unknown fields are
/// denied.
pub fn generate_named_fields(
    fields: &NamedFields,
    deny_unknown_fields: bool,
    tag: Option<&str>,
    path: TokenStream,
) -> TokenStream {
    let NamedFields {
        field_names,
        field_tys,
        field_defaults,
        key_names,
    } = fields;

    let unknown_fields_check = if deny_unknown_fields {
        let known = tag.into_iter().map(str::to_owned).chain(key_names.iter().cloned());
        quote! {
            let __known: &[&codable_json::__private::str] = &[#(#known),*];
            for __key in __container.all_keys() {
                if !__known.contains(&__key) {
                    return codable_json::__private::Err(
                        codable_json::__private::unknown_field(&__container, __key, __known)
                    );
                }
            }
        }
    } else {
        quote! {}
    };

    quote! {
        #unknown_fields_check
        #(
            let #field_names: #field_tys = if __container.contains(#key_names) {
                __container.decode(#key_names)?
            } else {
                match #field_defaults {
                    codable_json::__private::Some(__value) => __value,
                    codable_json::__private::None => __container.decode(#key_names)?,
                }
            };
        )*
        codable_json::__private::Ok(#path {
            #(
                #field_names,
            )*
        })
    }
}
