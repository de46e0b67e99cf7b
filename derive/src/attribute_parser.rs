use proc_macro2::{Ident, Span};
use syn::parse::{Parse, ParseStream, Parser};
use syn::{parenthesized, Attribute, Expr, LitStr, Token};

/// `#[codable(default)]` or `#[codable(default = expr)]` on a field.
#[derive(Debug)]
pub enum DefaultFieldAttribute {
    DefaultTrait,
    Function(Expr),
}

#[derive(Default, Debug)]
pub struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub default: Option<DefaultFieldAttribute>,
}

#[derive(Default, Debug)]
pub struct VariantAttributes {
    pub rename: Option<LitStr>,
}

#[derive(Debug)]
pub enum RenameAll {
    CamelCase,
    LowerCase,
    SnakeCase,
}

#[derive(Debug)]
pub enum TagType {
    Internal(String),
    External,
}

impl Default for TagType {
    fn default() -> Self {
        TagType::External
    }
}

#[derive(Default, Debug)]
pub struct DataAttributes {
    pub rename_all: Option<RenameAll>,
    pub tag: TagType,
    pub deny_unknown_fields: bool,
}

pub fn read_field_attributes(attributes: &[Attribute]) -> syn::Result<FieldAttributes> {
    let mut this = FieldAttributes::default();
    for_each_entry(attributes, |name, input| {
        match name.to_string().as_str() {
            "rename" => this.rename = Some(parse_value(input)?),
            "default" => {
                this.default = Some(if input.peek(Token![=]) {
                    DefaultFieldAttribute::Function(parse_value(input)?)
                } else {
                    DefaultFieldAttribute::DefaultTrait
                })
            }
            _ => return Err(unknown_attribute(&name, "field")),
        }
        Ok(())
    })?;
    Ok(this)
}

pub fn read_variant_attributes(attributes: &[Attribute]) -> syn::Result<VariantAttributes> {
    let mut this = VariantAttributes::default();
    for_each_entry(attributes, |name, input| {
        match name.to_string().as_str() {
            "rename" => this.rename = Some(parse_value(input)?),
            _ => return Err(unknown_attribute(&name, "variant")),
        }
        Ok(())
    })?;
    Ok(this)
}

pub fn read_data_attributes(attributes: &[Attribute]) -> syn::Result<DataAttributes> {
    let mut this = DataAttributes::default();
    for_each_entry(attributes, |name, input| {
        match name.to_string().as_str() {
            "rename_all" => {
                let lit: LitStr = parse_value(input)?;
                this.rename_all = Some(match lit.value().as_str() {
                    "camelCase" => RenameAll::CamelCase,
                    "lowercase" => RenameAll::LowerCase,
                    "snake_case" => RenameAll::SnakeCase,
                    _ => {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "invalid rename_all rule. Valid rules are: camelCase, lowercase, snake_case",
                        ))
                    }
                });
            }
            "tag" => this.tag = TagType::Internal(parse_value::<LitStr>(input)?.value()),
            "deny_unknown_fields" => this.deny_unknown_fields = true,
            _ => return Err(unknown_attribute(&name, "container")),
        }
        Ok(())
    })?;
    Ok(this)
}

/// Calls `on_entry` with the name of every entry of every
/// `#[codable(name, name = value, ..)]` in `attributes`, the stream
/// positioned right after the name. Later entries override earlier ones.
fn for_each_entry<F>(attributes: &[Attribute], mut on_entry: F) -> syn::Result<()>
where
    F: FnMut(Ident, ParseStream) -> syn::Result<()>,
{
    for attribute in attributes {
        if !attribute.path.is_ident("codable") {
            continue;
        }
        let parser = |input: ParseStream| -> syn::Result<()> {
            let content;
            parenthesized!(content in input);
            loop {
                let name = content.parse::<Ident>()?;
                on_entry(name, &content)?;
                if !parse_separator(&content)? {
                    return Ok(());
                }
            }
        };
        parser.parse2(attribute.tokens.clone())?;
    }
    Ok(())
}

/// `= value` following an entry name.
fn parse_value<T: Parse>(input: ParseStream) -> syn::Result<T> {
    input.parse::<Token![=]>()?;
    input.parse()
}

/// Consumes the comma after an entry. Returns whether another entry
/// follows.
fn parse_separator(input: ParseStream) -> syn::Result<bool> {
    if input.is_empty() {
        return Ok(false);
    }
    input.parse::<Token![,]>()?;
    Ok(!input.is_empty())
}

fn unknown_attribute(name: &Ident, position: &str) -> syn::Error {
    syn::Error::new_spanned(
        name,
        format!("Unknown codable {} attribute: {}", position, name),
    )
}

pub fn tag_on_struct_error() -> syn::Error {
    syn::Error::new(Span::call_site(), "tag is only supported on enums.")
}
