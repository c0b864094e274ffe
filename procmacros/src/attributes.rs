use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::{Attribute, Error, LitStr, Result};

/// Casing applied to every property name that has no explicit `rename`.
#[derive(Clone, Copy, Default)]
pub(crate) enum RenameRule {
    #[default]
    None,
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            other => Err(Error::new(
                lit.span(),
                format!(
                    "unknown rename_all rule `{other}`, expected camelCase, PascalCase, \
                     snake_case or SCREAMING_SNAKE_CASE"
                ),
            )),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::None => name.to_owned(),
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}

#[derive(Default)]
pub(crate) struct ContainerAttributes {
    pub(crate) rename_all: RenameRule,
}

impl ContainerAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("odata")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = RenameRule::parse(&lit)?;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename_all = \"...\"`"))
                }
            })?;
        }
        Ok(out)
    }
}

#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub(crate) rename: Option<LitStr>,
    pub(crate) skip: bool,
}

impl FieldAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("odata")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_identifier(&lit)?;
                    out.rename = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// OData property names are identifiers: a letter or `_`, then letters,
/// digits or `_`.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn validate_identifier(lit: &LitStr) -> Result<()> {
    if is_identifier(&lit.value()) {
        Ok(())
    } else {
        Err(Error::new(
            lit.span(),
            "OData property names must be identifiers (letter or `_`, then letters, digits or `_`)",
        ))
    }
}
