use super::Expand;
use crate::schema::{Direction, DirectiveAttr};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Expands to an `Option<Directive>` expression.
    pub(super) fn expand_option_directive(&self, attr: Option<&DirectiveAttr>) -> TokenStream {
        match attr {
            Some(attr) => {
                let directive = self.expand_directive(attr);
                quote!(::core::option::Option::Some(#directive))
            }
            None => quote!(::core::option::Option::None),
        }
    }

    fn expand_directive(&self, attr: &DirectiveAttr) -> TokenStream {
        let dbfill = &self.dbfill;
        let mut directive = quote!(#dbfill::Directive::new());

        if let Some(alias) = &attr.alias {
            directive = quote!(#directive.alias(#alias));
        }

        if let Some(prefix) = &attr.prefix {
            directive = quote!(#directive.parameter_prefix(#prefix));
        }

        if let Some(suffix) = &attr.suffix {
            directive = quote!(#directive.parameter_suffix(#suffix));
        }

        if let Some(direction) = attr.direction {
            let variant = match direction {
                Direction::FromStore => quote!(FromStore),
                Direction::ToStore => quote!(ToStore),
                Direction::Both => quote!(Both),
                Direction::None => quote!(None),
            };
            directive = quote!(#directive.fill_direction(#dbfill::FillDirection::#variant));
        }

        if let Some(allow) = attr.allow_missing {
            directive = quote!(#directive.allow_missing(#allow));
        }

        if let Some(storage) = &attr.storage {
            directive = quote!(#directive.storage_type(#dbfill::StorageType::#storage));
        }

        directive
    }
}
