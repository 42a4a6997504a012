use syn::{Attribute, LitStr, Token, token::Paren};

use crate::{REFLECT_ATTRIBUTE_NAME, SERDE_ATTRIBUTE_NAME};

/// The alias that hides a field, see `NamedField::HIDDEN`.
const HIDDEN: &str = "-";

/// Field level attributes.
///
/// `#[reflect(alias = "...")]` takes precedence over `#[serde(skip)]`,
/// which takes precedence over `#[serde(rename = "...")]`.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    alias: Option<LitStr>,
    serde_rename: Option<LitStr>,
    serde_skip: bool,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                this.parse_reflect(attr)?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                this.parse_serde(attr)?;
            }
        }

        Ok(this)
    }

    fn parse_reflect(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("alias") {
                if self.alias.is_some() {
                    return Err(meta.error("duplicate `alias`"));
                }
                self.alias = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown field attribute, expected `alias`"))
            }
        })
    }

    /// Reads `rename = "..."` and `skip`, consuming every other option.
    fn parse_serde(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                self.serde_rename = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("skip") {
                self.serde_skip = true;
            } else if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            } else if meta.input.peek(Paren) {
                meta.input.parse::<proc_macro2::Group>()?;
            }
            Ok(())
        })
    }

    /// Returns the alias annotation of the field, if any.
    pub fn alias(&self) -> Option<String> {
        if let Some(alias) = &self.alias {
            return Some(alias.value());
        }
        if self.serde_skip {
            return Some(String::from(HIDDEN));
        }
        self.serde_rename.as_ref().map(LitStr::value)
    }
}
