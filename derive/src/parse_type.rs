use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::DeriveInput;

use crate::attribute_parser::{
    read_data_attributes, read_field_attributes, read_variant_attributes, tag_on_struct_error,
    DataAttributes, DefaultFieldAttribute, RenameAll, TagType,
};
use crate::bound;

#[derive(Debug)]
pub struct NamedFields {
    pub field_names: Vec<syn::Ident>,
    pub field_tys: Vec<syn::Type>,
    pub field_defaults: Vec<TokenStream>,
    pub key_names: Vec<String>,
}

impl NamedFields {
    fn parse(fields: syn::FieldsNamed, data_attrs: &DataAttributes) -> syn::Result<Self> {
        let mut field_names = vec![];
        let mut field_tys = vec![];
        let mut key_names = vec![];
        let mut field_defaults = vec![];

        for field in fields.named.into_iter() {
            let field_name = match field.ident {
                Some(ident) => ident,
                None => return Err(syn::Error::new(Span::call_site(), "expected a named field")),
            };
            let field_ty = field.ty;

            let attrs = read_field_attributes(&field.attrs)?;
            let renamed = attrs.rename.as_ref().map(|lit| lit.value());
            let key_name = key_name_for_ident(
                field_name.to_string(),
                data_attrs.rename_all.as_ref(),
                renamed.as_deref(),
            );

            let field_default = match &attrs.default {
                Some(DefaultFieldAttribute::DefaultTrait) => {
                    quote! { codable_json::__private::Some(::std::default::Default::default()) }
                }
                Some(DefaultFieldAttribute::Function(expr)) => {
                    quote! { codable_json::__private::Some(#expr) }
                }
                None => {
                    quote! { <#field_ty as codable_json::Decodable>::absent() }
                }
            };

            field_names.push(field_name);
            field_tys.push(field_ty);
            key_names.push(key_name);
            field_defaults.push(field_default);
        }

        Ok(Self {
            field_names,
            field_tys,
            key_names,
            field_defaults,
        })
    }
}

pub struct DerivedTypeInfo {
    pub common: CommonDerivedTypeInfo,
    pub data: DerivedTypeData,
}

pub struct CommonDerivedTypeInfo {
    pub impl_trait_tokens: TokenStream,
    pub deny_unknown_fields: bool,
}

pub enum DerivedTypeData {
    Struct(NamedFields),
    Enum {
        tag: TagType,
        variants: Vec<Variant>,
    },
}

pub struct Variant {
    pub ident: Ident,
    pub data: VariantData,
    pub key_name: String,
}

#[derive(Debug)]
pub enum VariantData {
    Unit,
    Named(NamedFields),
}

impl DerivedTypeInfo {
    pub fn parse(input: DeriveInput) -> syn::Result<Self> {
        let attrs = read_data_attributes(&input.attrs)?;

        let ident = input.ident;
        let (impl_generics, ty_generics, ..) = input.generics.split_for_impl();

        let bound = quote! { codable_json::Decodable };
        let bounded_where_clause = bound::where_clause_with_bound(&input.generics, bound);

        let impl_trait_tokens = quote! {
            impl #impl_generics codable_json::Decodable for #ident #ty_generics #bounded_where_clause
        };

        let data = match input.data {
            syn::Data::Struct(s) => {
                if let TagType::Internal(_) = attrs.tag {
                    return Err(tag_on_struct_error());
                }
                match s.fields {
                    syn::Fields::Named(fields) => {
                        DerivedTypeData::Struct(NamedFields::parse(fields, &attrs)?)
                    }
                    _ => {
                        return Err(syn::Error::new(
                            Span::call_site(),
                            "currently only structs with named fields are supported",
                        ))
                    }
                }
            }
            syn::Data::Enum(e) => {
                let mut parsed_variants = vec![];
                for variant in e.variants {
                    let variant_attrs = read_variant_attributes(&variant.attrs)?;
                    let renamed = variant_attrs.rename.as_ref().map(|lit| lit.value());
                    let key_name = key_name_for_ident(
                        variant.ident.to_string(),
                        attrs.rename_all.as_ref(),
                        renamed.as_deref(),
                    );
                    let data = match variant.fields {
                        syn::Fields::Named(fields) => {
                            if let TagType::External = attrs.tag {
                                return Err(syn::Error::new_spanned(
                                    &variant.ident,
                                    "variants with fields need a `tag` attribute on the enum",
                                ));
                            }
                            VariantData::Named(NamedFields::parse(fields, &attrs)?)
                        }
                        syn::Fields::Unnamed(_) => {
                            return Err(syn::Error::new_spanned(
                                &variant.ident,
                                "tuple variants are not supported",
                            ))
                        }
                        syn::Fields::Unit => VariantData::Unit,
                    };
                    parsed_variants.push(Variant {
                        ident: variant.ident,
                        key_name,
                        data,
                    });
                }
                DerivedTypeData::Enum {
                    tag: attrs.tag,
                    variants: parsed_variants,
                }
            }
            syn::Data::Union(_) => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "currently only structs and enums are supported by this derive",
                ))
            }
        };

        Ok(Self {
            common: CommonDerivedTypeInfo {
                impl_trait_tokens,
                deny_unknown_fields: attrs.deny_unknown_fields,
            },
            data,
        })
    }
}

fn key_name_for_ident(
    ident: String,
    rename_all: Option<&RenameAll>,
    rename: Option<&str>,
) -> String {
    match rename {
        Some(name) => name.to_string(),
        None => match rename_all {
            Some(RenameAll::CamelCase) => ident.to_case(Case::Camel),
            Some(RenameAll::LowerCase) => ident.to_lowercase(),
            Some(RenameAll::SnakeCase) => ident.to_case(Case::Snake),
            None => ident,
        },
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{DerivedTypeData, DerivedTypeInfo};

    fn parse_error(input: syn::DeriveInput) -> String {
        match DerivedTypeInfo::parse(input) {
            Ok(_) => panic!("expected the derive input to be rejected"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn variants_reject_field_only_attributes() {
        let message = parse_error(parse_quote! {
            enum Shape {
                #[codable(default)]
                Circle,
            }
        });
        assert_eq!(message, "Unknown codable variant attribute: default");

        let message = parse_error(parse_quote! {
            #[codable(tag = "kind")]
            enum Shape {
                Circle {
                    #[codable(default = 1.0)]
                    radius: f64,
                },
                #[codable(rename = "box", default)]
                Square,
            }
        });
        assert_eq!(message, "Unknown codable variant attribute: default");
    }

    #[test]
    fn variants_can_be_renamed() {
        let info = DerivedTypeInfo::parse(parse_quote! {
            #[codable(rename_all = "lowercase")]
            enum Shape {
                #[codable(rename = "box")]
                Square,
                Circle,
            }
        })
        .unwrap();
        match info.data {
            DerivedTypeData::Enum { variants, .. } => {
                let names = variants.iter().map(|v| v.key_name.as_str()).collect::<Vec<_>>();
                assert_eq!(names, ["box", "circle"]);
            }
            DerivedTypeData::Struct(_) => panic!("expected an enum"),
        }
    }

    #[test]
    fn attribute_errors() {
        let message = parse_error(parse_quote! {
            #[codable(tag = "kind")]
            struct Point {
                x: u32,
            }
        });
        assert_eq!(message, "tag is only supported on enums.");

        let message = parse_error(parse_quote! {
            #[codable(rename_all = "kebab-case")]
            struct Point {
                x: u32,
            }
        });
        assert!(message.starts_with("invalid rename_all rule."));

        let message = parse_error(parse_quote! {
            struct Point {
                #[codable(skip)]
                x: u32,
            }
        });
        assert_eq!(message, "Unknown codable field attribute: skip");
    }
}
