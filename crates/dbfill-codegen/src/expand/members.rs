use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_members(&self) -> Vec<TokenStream> {
        self.model
            .fields
            .iter()
            .map(|field| self.expand_member(field))
            .collect()
    }

    /// Each member is a block defining its getter and setter as plain
    /// functions, then building the `Member` from them.
    fn expand_member(&self, field: &Field) -> TokenStream {
        let dbfill = &self.dbfill;
        let model_ident = &self.model.ident;
        let field_ident = &field.ident;
        let ty = &field.ty;
        let name = &field.name;
        let directive = self.expand_option_directive(field.directive.as_ref());

        let (get, set, constructor) = match &field.accessor {
            Some(accessor) => {
                let get_path = self.resolve_self(&accessor.get);
                let set_path = self.resolve_self(&accessor.set);
                (
                    quote!(#dbfill::Param::Value(#dbfill::Value::from(#get_path(model)))),
                    quote!(#set_path(model, #dbfill::coerce::<#ty>(value)?)),
                    quote!(accessor),
                )
            }
            None => (
                quote!(#dbfill::Store::store(&model.#field_ident)),
                quote!(model.#field_ident = #dbfill::coerce::<#ty>(value)?),
                quote!(field),
            ),
        };

        quote! {
            {
                fn get(model: &#model_ident) -> #dbfill::Param<'_> {
                    #get
                }

                fn set(model: &mut #model_ident, value: #dbfill::Value) -> #dbfill::Result<()> {
                    #set;
                    ::core::result::Result::Ok(())
                }

                #dbfill::Member::#constructor(
                    #name,
                    ::core::any::type_name::<#ty>(),
                    #directive,
                    get,
                    set,
                )
            }
        }
    }

    /// Accessor paths are called from nested functions, where `Self` is not
    /// in scope.
    fn resolve_self(&self, path: &syn::ExprPath) -> syn::ExprPath {
        let mut path = path.clone();

        if path.qself.is_none() {
            if let Some(first) = path.path.segments.first_mut() {
                if first.ident == "Self" {
                    first.ident = syn::Ident::new(&self.model.ident.to_string(), first.ident.span());
                }
            }
        }

        path
    }
}
