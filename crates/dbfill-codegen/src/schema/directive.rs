use super::{ErrorSet, RenameRule};

/// Variants of `dbfill::StorageType` accepted by `storage = ...`.
const STORAGE_TYPES: &[&str] = &[
    "AnsiString",
    "AnsiStringFixedLength",
    "Binary",
    "Boolean",
    "Byte",
    "Currency",
    "Date",
    "DateTime",
    "DateTime2",
    "DateTimeOffset",
    "Decimal",
    "Double",
    "Guid",
    "Int16",
    "Int32",
    "Int64",
    "Object",
    "SByte",
    "Single",
    "String",
    "StringFixedLength",
    "Time",
    "UInt16",
    "UInt32",
    "UInt64",
    "VarNumeric",
    "Xml",
    "Structured",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    FromStore,
    ToStore,
    Both,
    None,
}

impl Direction {
    fn from_ident(ident: &syn::Ident) -> syn::Result<Self> {
        Ok(match ident.to_string().as_str() {
            "from_store" => Self::FromStore,
            "to_store" => Self::ToStore,
            "both" => Self::Both,
            "none" => Self::None,
            other => {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!(
                        "unknown direction `{other}`; expected `from_store`, `to_store`, `both` or `none`"
                    ),
                ))
            }
        })
    }
}

/// A parsed `#[dbfill(...)]` attribute.
///
/// Allowed syntax:
///
/// ```text
/// #[dbfill]
/// #[dbfill(alias = "Name", prefix = "@p_", suffix = "_IN")]
/// #[dbfill(direction = from_store, allow_missing)]
/// #[dbfill(allow_missing = false, storage = DateTime2)]
/// #[dbfill(rename_all = "PascalCase")]
/// #[dbfill(get = Self::total, set = Self::set_total)]
/// ```
#[derive(Debug)]
pub(crate) struct DirectiveAttr {
    pub(crate) alias: Option<syn::LitStr>,
    pub(crate) prefix: Option<syn::LitStr>,
    pub(crate) suffix: Option<syn::LitStr>,
    pub(crate) direction: Option<Direction>,
    pub(crate) allow_missing: Option<bool>,
    pub(crate) storage: Option<syn::Ident>,
    pub(crate) rename_all: Option<(syn::LitStr, RenameRule)>,

    /// Accessor functions replacing direct field access
    pub(crate) get: Option<syn::ExprPath>,
    pub(crate) set: Option<syn::ExprPath>,
}

impl DirectiveAttr {
    fn empty() -> Self {
        Self {
            alias: None,
            prefix: None,
            suffix: None,
            direction: None,
            allow_missing: None,
            storage: None,
            rename_all: None,
            get: None,
            set: None,
        }
    }

    pub(crate) fn from_ast(attr: &syn::Attribute) -> syn::Result<Self> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Self::empty()),
            syn::Meta::List(_) => attr.parse_args(),
            syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[dbfill]` or `#[dbfill(...)]`",
            )),
        }
    }
}

impl syn::parse::Parse for DirectiveAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::empty();
        let mut errs = ErrorSet::new();

        while !input.is_empty() {
            let key: syn::Ident = input.parse()?;

            match key.to_string().as_str() {
                "alias" => {
                    let lit = parse_str_value(input)?;
                    set_once(&mut result.alias, &key, lit, &mut errs);
                }
                "prefix" => {
                    let lit = parse_str_value(input)?;
                    set_once(&mut result.prefix, &key, lit, &mut errs);
                }
                "suffix" => {
                    let lit = parse_str_value(input)?;
                    set_once(&mut result.suffix, &key, lit, &mut errs);
                }
                "direction" => {
                    let _eq_token: syn::Token![=] = input.parse()?;
                    let ident: syn::Ident = input.parse()?;
                    match Direction::from_ident(&ident) {
                        Ok(direction) => set_once(&mut result.direction, &key, direction, &mut errs),
                        Err(err) => errs.push(err),
                    }
                }
                "allow_missing" => {
                    let allow = if input.peek(syn::Token![=]) {
                        let _eq_token: syn::Token![=] = input.parse()?;
                        input.parse::<syn::LitBool>()?.value
                    } else {
                        true
                    };
                    set_once(&mut result.allow_missing, &key, allow, &mut errs);
                }
                "storage" => {
                    let _eq_token: syn::Token![=] = input.parse()?;
                    let ident: syn::Ident = input.parse()?;
                    if STORAGE_TYPES.contains(&ident.to_string().as_str()) {
                        set_once(&mut result.storage, &key, ident, &mut errs);
                    } else {
                        errs.push(syn::Error::new_spanned(
                            &ident,
                            format!("unknown storage type `{ident}`"),
                        ));
                    }
                }
                "rename_all" => {
                    let lit = parse_str_value(input)?;
                    match RenameRule::from_lit(&lit) {
                        Ok(rule) => set_once(&mut result.rename_all, &key, (lit, rule), &mut errs),
                        Err(err) => errs.push(err),
                    }
                }
                "get" => {
                    let _eq_token: syn::Token![=] = input.parse()?;
                    let path: syn::ExprPath = input.parse()?;
                    set_once(&mut result.get, &key, path, &mut errs);
                }
                "set" => {
                    let _eq_token: syn::Token![=] = input.parse()?;
                    let path: syn::ExprPath = input.parse()?;
                    set_once(&mut result.set, &key, path, &mut errs);
                }
                _ => {
                    errs.push(syn::Error::new_spanned(
                        &key,
                        format!("unknown dbfill attribute `{key}`"),
                    ));

                    // Skip the value so later keys still get checked.
                    if input.peek(syn::Token![=]) {
                        let _eq_token: syn::Token![=] = input.parse()?;
                        let _value: syn::Expr = input.parse()?;
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }
}

fn parse_str_value(input: syn::parse::ParseStream) -> syn::Result<syn::LitStr> {
    let _eq_token: syn::Token![=] = input.parse()?;
    input.parse()
}

fn set_once<T>(slot: &mut Option<T>, key: &syn::Ident, value: T, errs: &mut ErrorSet) {
    if slot.is_some() {
        errs.push(syn::Error::new_spanned(key, format!("duplicate `{key}` key")));
    } else {
        *slot = Some(value);
    }
}
