mod analyze;
mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use syn::parse_macro_input;

use analyze::analyze_members;
use emit::gen_enumeration;
use parse::EnumerationInput;

pub fn entrypoint(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as EnumerationInput);
    let (specs, compile_errors) = analyze_members(&parsed);
    if !compile_errors.is_empty() {
        let mut errs_ts = proc_macro2::TokenStream::new();
        for e in compile_errors {
            errs_ts.extend(e.to_compile_error());
        }
        return errs_ts.into();
    }
    gen_enumeration(&parsed, &specs).into()
}
