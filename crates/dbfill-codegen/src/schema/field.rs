use super::{member_name, DirectiveAttr, ErrorSet, RenameRule};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Member name, after `rename_all`
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field visibility
    pub(crate) vis: syn::Visibility,

    /// The field's own `#[dbfill(...)]` attribute
    pub(crate) directive: Option<DirectiveAttr>,

    /// Getter and setter used instead of the field itself
    pub(crate) accessor: Option<Accessor>,
}

#[derive(Debug)]
pub(crate) struct Accessor {
    pub(crate) get: syn::ExprPath,
    pub(crate) set: syn::ExprPath,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, rename_all: Option<RenameRule>) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut directive: Option<DirectiveAttr> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("dbfill") {
                continue;
            }

            if directive.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[dbfill] attribute"));
                continue;
            }

            match DirectiveAttr::from_ast(attr) {
                Ok(attr) => {
                    if let Some((lit, _)) = &attr.rename_all {
                        errs.push(syn::Error::new_spanned(
                            lit,
                            "`rename_all` is only allowed on the model type",
                        ));
                    }
                    directive = Some(attr);
                }
                Err(err) => errs.push(err),
            }
        }

        let accessor = match directive.as_mut().map(|attr| (attr.get.take(), attr.set.take())) {
            Some((Some(get), Some(set))) => Some(Accessor { get, set }),
            Some((Some(path), None)) | Some((None, Some(path))) => {
                errs.push(syn::Error::new_spanned(
                    path,
                    "`get` and `set` must be given together",
                ));
                None
            }
            _ => None,
        };

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            name: member_name(ident, rename_all),
            ty: field.ty.clone(),
            vis: field.vis.clone(),
            directive,
            accessor,
        })
    }

    /// A field is registered when it carries its own directive, or when the
    /// model carries one and the field is not private.
    pub(crate) fn is_bindable(&self, model_has_directive: bool) -> bool {
        self.directive.is_some()
            || (model_has_directive && !matches!(self.vis, syn::Visibility::Inherited))
    }
}
