use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let ident_str = ident.to_string();
        match ident_str.as_str() {
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            _ => return Err(syn::Error::new_spanned(ident, format!("unknown tag `{}`", ident_str))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.parse::<Token![,]>().is_err() {
                break;
            }
        }

        Ok(args)
    }
}

/// Creates a `let` expression that destructures `self` into its named fields. Returns a compile
/// error if the fields are not named.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // parse outer attributes, including documentation and the `error` attribute
        let attributes = input.call(Attribute::parse_outer)?;
        let remaining = input.parse::<ItemStruct>()?;

        let mut error_args = ErrorArgs::default();
        for attr in &attributes {
            if attr.path().is_ident("error") {
                error_args = attr.parse_args::<ErrorArgs>()?;
                break;
            }
        }

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(
                &remaining.ident,
                "missing `#[error(message = ...)]` attribute",
            ));
        }

        Ok(ErrorKindTarget {
            name: remaining.ident,
            fields: remaining.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = self.error_args.message.as_ref();
        let labels = self.error_args.labels.as_ref()
            .map(|labels| quote! {
                (#labels).into_iter().map(|label| label.to_string()).collect::<Vec<String>>()
            })
            .unwrap_or_else(|| quote! { Vec::<String>::new() });
        let help = self.error_args.help.as_ref()
            .map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            #[allow(unused_variables)]
            fn message(&self) -> String {
                #destructure_expr
                (#message).to_string()
            }

            #[allow(unused_variables, unused_mut)]
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> cas_error::ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #destructure_expr

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = cas_error::ariadne::Report::build(
                    cas_error::ariadne::ReportKind::Error,
                    src_id,
                    offset,
                )
                    .with_message(cas_error::ErrorKind::message(self))
                    .with_labels(
                        spans.iter()
                            .zip(#labels)
                            .map(|(span, label_str)| {
                                let mut label = cas_error::ariadne::Label::new((src_id, span.clone()))
                                    .with_color(cas_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}
