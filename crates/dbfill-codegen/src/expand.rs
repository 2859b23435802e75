mod directive;
mod members;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for dbfill types
    dbfill: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let dbfill = &self.dbfill;
        let model_ident = &self.model.ident;
        let directive = self.expand_option_directive(self.model.directive.as_ref());
        let members = self.expand_members();

        wrap_in_const(quote! {
            impl #dbfill::Model for #model_ident {
                fn build_schema() -> #dbfill::Schema<Self> {
                    #dbfill::Schema::record(
                        ::core::any::type_name::<Self>(),
                        #directive,
                        vec![ #( #members ),* ],
                    )
                }
            }
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        dbfill: quote!(_dbfill::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use dbfill as _dbfill;
            #code
        };
    }
}
