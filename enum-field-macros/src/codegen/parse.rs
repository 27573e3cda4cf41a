use syn::parse::{Parse, ParseStream};
use syn::{braced, parenthesized, Expr, Ident, Token, Visibility};

// 低层语法解析：只负责结构，不做语义校验（见 analyze）

pub struct EnumerationInput {
    pub vis: Visibility,
    pub host: Ident,
    pub members: Vec<MemberDecl>,
}

pub struct MemberDecl {
    pub name: Ident,
    pub options: Vec<MemberOption>,
    pub object: Option<Expr>,
}

pub struct MemberOption {
    pub key: Ident,
    pub value: Expr,
}

impl Parse for EnumerationInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let vis: Visibility = input.parse()?;
        let host: Ident = input.parse()?;
        let body;
        braced!(body in input);
        let members = body
            .parse_terminated(MemberDecl::parse, Token![,])?
            .into_iter()
            .collect();
        Ok(Self { vis, host, members })
    }
}

impl Parse for MemberDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let options = if input.peek(syn::token::Paren) {
            let content;
            parenthesized!(content in input);
            content
                .parse_terminated(MemberOption::parse, Token![,])?
                .into_iter()
                .collect()
        } else {
            Vec::new()
        };
        let object = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };
        Ok(Self {
            name,
            options,
            object,
        })
    }
}

impl Parse for MemberOption {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value: Expr = input.parse()?;
        Ok(Self { key, value })
    }
}
