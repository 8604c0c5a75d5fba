use litrs::StringLit;
use proc_macro2::{Literal, Span, TokenStream};
use quote::quote_spanned;
use syn::parse::{Parse, ParseBuffer};
use syn::{parenthesized, token, Error, Path, Result, Token};

#[proc_macro]
pub fn bits(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    bits_impl(tokens.into()).into()
}

struct BitsInput {
    _paren_token: token::Paren,
    crate_path: Path,
    _comma_token: Token![,],
    lit: Literal,
}

impl Parse for BitsInput {
    fn parse(input: &ParseBuffer) -> Result<Self> {
        let content;
        let input = Self {
            _paren_token: parenthesized!(content in input),
            crate_path: content.parse()?,
            _comma_token: content.parse()?,
            lit: content.parse()?,
        };
        if !content.is_empty() {
            return Err(content.error("expected a single string literal"));
        }
        Ok(input)
    }
}

fn bits_impl(tokens: TokenStream) -> TokenStream {
    let input: BitsInput = match syn::parse2(tokens) {
        Ok(input) => input,
        Err(e) => return e.into_compile_error(),
    };
    let span = input.lit.span();
    let Ok(string_lit) = StringLit::try_from(input.lit) else {
        return Error::new(span, "expected a string literal of binary digits")
            .into_compile_error();
    };
    match parse_digits(string_lit.value(), span) {
        Ok(bytes) => {
            let crate_path = input.crate_path;
            let bytes = bytes.into_iter().map(Literal::u8_unsuffixed);
            quote_spanned! {span=>
                #crate_path::ByteSequence::from_vec(::std::vec![#(#bytes),*])
            }
        }
        Err(e) => e.into_compile_error(),
    }
}

/// Strips spaces, zero-extends to whole bytes, and packs the digits.
fn parse_digits(value: &str, span: Span) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' => (),
            '0' => digits.push(0),
            '1' => digits.push(1),
            _ => {
                return Err(Error::new(
                    span,
                    format!("invalid character {c:?} in bits literal, expected '0', '1' or ' '"),
                ))
            }
        }
    }

    let padding = (8 - digits.len() % 8) % 8;
    let mut padded = vec![0; padding];
    padded.extend(digits);
    Ok(padded
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| acc << 1 | bit))
        .collect())
}
