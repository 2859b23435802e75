use super::{DirectiveAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// The type's `#[dbfill(...)]` attribute
    pub(crate) directive: Option<DirectiveAttr>,

    /// Registered fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();

        let fields = match &ast.fields {
            syn::Fields::Named(node) => Some(node),
            syn::Fields::Unit => None,
            syn::Fields::Unnamed(_) => {
                errs.push(syn::Error::new_spanned(
                    &ast.fields,
                    "model fields must be named",
                ));
                None
            }
        };

        if !ast.generics.params.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut directive = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("dbfill") {
                continue;
            }

            if directive.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[dbfill] attribute"));
                continue;
            }

            match DirectiveAttr::from_ast(attr) {
                Ok(attr) => {
                    if let Some(alias) = &attr.alias {
                        errs.push(syn::Error::new_spanned(
                            alias,
                            "`alias` is only allowed on fields",
                        ));
                    }
                    for path in attr.get.iter().chain(&attr.set) {
                        errs.push(syn::Error::new_spanned(
                            path,
                            "`get` and `set` are only allowed on fields",
                        ));
                    }
                    directive = Some(attr);
                }
                Err(err) => errs.push(err),
            }
        }

        let rename_all = directive
            .as_ref()
            .and_then(|attr| attr.rename_all.as_ref())
            .map(|(_, rule)| *rule);

        let mut bindable = vec![];

        for node in fields.into_iter().flat_map(|fields| fields.named.iter()) {
            match Field::from_ast(node, rename_all) {
                Ok(field) => {
                    if field.is_bindable(directive.is_some()) {
                        bindable.push(field);
                    }
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            directive,
            fields: bindable,
        })
    }
}
