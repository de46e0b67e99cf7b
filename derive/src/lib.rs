#![allow(
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::unseparated_literal_suffix
)]

extern crate proc_macro;

mod attribute_parser;
mod bound;
mod derive_enum;
mod derive_struct;
mod parse_type;

use parse_type::{DerivedTypeData, DerivedTypeInfo};
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::attribute_parser::TagType;

#[proc_macro_derive(Decodable, attributes(codable))]
pub fn derive_decodable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match DerivedTypeInfo::parse(input) {
        Ok(derived) => derived.gen().into(),
        Err(e) => e.to_compile_error().into(),
    }
}

impl DerivedTypeInfo {
    fn gen(self) -> proc_macro2::TokenStream {
        match self.data {
            DerivedTypeData::Struct(fields) => {
                derive_struct::generate_derive_struct_impl(self.common, fields)
            }
            DerivedTypeData::Enum {
                tag: TagType::External,
                variants,
            } => derive_enum::generate_derive_untagged_enum_impl(self.common, variants),
            DerivedTypeData::Enum {
                tag: TagType::Internal(tag),
                variants,
            } => derive_enum::generate_derive_tagged_enum_impl(self.common, tag, variants),
        }
    }
}
