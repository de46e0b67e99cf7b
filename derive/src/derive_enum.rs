use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_struct::generate_named_fields;
use crate::parse_type::{CommonDerivedTypeInfo, Variant, VariantData};

/// Enums without a tag are written as the bare variant name: `"Circle"`.
pub fn generate_derive_untagged_enum_impl(
    info: CommonDerivedTypeInfo,
    variants: Vec<Variant>,
) -> TokenStream {
    let CommonDerivedTypeInfo {
        impl_trait_tokens, ..
    } = info;

    let key_names = variants.iter().map(|v| &v.key_name).collect::<Vec<_>>();
    let idents = variants.iter().map(|v| &v.ident);

    quote! {
        #impl_trait_tokens {
            fn decode(__decoder: &codable_json::Decoder) -> codable_json::Result<Self> {
                let __variant = __decoder.single_value_container().decode_str()?;
                match __variant {
                    #(
                        #key_names => codable_json::__private::Ok(Self::#idents),
                    )*
                    _ => codable_json::__private::Err(codable_json::__private::unknown_variant(
                        __decoder.coding_path(),
                        __variant,
                        &[#(#key_names),*],
                    )),
                }
            }
        }
    }
}

/// Internally tagged enums are objects whose `tag` member names the variant;
/// the remaining members are the variant's fields.
pub fn generate_derive_tagged_enum_impl(
    info: CommonDerivedTypeInfo,
    tag: String,
    variants: Vec<Variant>,
) -> TokenStream {
    let CommonDerivedTypeInfo {
        impl_trait_tokens,
        deny_unknown_fields,
    } = info;

    let key_names = variants.iter().map(|v| &v.key_name).collect::<Vec<_>>();
    let arms = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let body = match &variant.data {
            VariantData::Unit => generate_named_fields(
                &crate::parse_type::NamedFields {
                    field_names: vec![],
                    field_tys: vec![],
                    field_defaults: vec![],
                    key_names: vec![],
                },
                deny_unknown_fields,
                Some(tag.as_str()),
                quote! { Self::#ident },
            ),
            VariantData::Named(fields) => generate_named_fields(
                fields,
                deny_unknown_fields,
                Some(tag.as_str()),
                quote! { Self::#ident },
            ),
        };
        quote! { { #body } }
    });

    quote! {
        #impl_trait_tokens {
            fn decode(__decoder: &codable_json::Decoder) -> codable_json::Result<Self> {
                let __container = __decoder.keyed_container()?;
                let __variant: codable_json::__private::String = __container.decode(#tag)?;
                match __variant.as_str() {
                    #(
                        #key_names => #arms
                    )*
                    _ => codable_json::__private::Err(codable_json::__private::unknown_variant(
                        &__container.coding_path().push(#tag),
                        &__variant,
                        &[#(#key_names),*],
                    )),
                }
            }
        }
    }
}
