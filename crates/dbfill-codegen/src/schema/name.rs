use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::ext::IdentExt;

/// Case conversion applied to member names by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    pub(crate) fn from_lit(lit: &syn::LitStr) -> syn::Result<Self> {
        Ok(match lit.value().as_str() {
            "PascalCase" => Self::PascalCase,
            "camelCase" => Self::CamelCase,
            "snake_case" => Self::SnakeCase,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnakeCase,
            "kebab-case" => Self::KebabCase,
            other => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!(
                        "unknown rename rule `{other}`; expected one of `PascalCase`, `camelCase`, \
                         `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`"
                    ),
                ))
            }
        })
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::PascalCase => name.to_upper_camel_case(),
            Self::CamelCase => name.to_lower_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
        }
    }
}

/// Member name of a field: its identifier without the `r#` prefix, then renamed.
pub(crate) fn member_name(ident: &syn::Ident, rule: Option<RenameRule>) -> String {
    let name = ident.unraw().to_string();

    match rule {
        Some(rule) => rule.apply(&name),
        None => name,
    }
}
