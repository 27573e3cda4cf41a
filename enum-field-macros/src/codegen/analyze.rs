use std::collections::{HashMap, HashSet};

use super::msgs::{
    ERR_DUPLICATE_ID, ERR_DUPLICATE_NAME, ERR_EMPTY, ERR_ID_NOT_POSITIVE, ERR_ID_OUT_OF_RANGE,
    ERR_OBJECT_OPTION, ERR_OPTION_REPEATED, ERR_SEAL_NOT_BOOL, ERR_UNKNOWN_OPTION,
};
use super::parse::{EnumerationInput, MemberDecl, MemberOption};
use syn::{Expr, Ident, Lit};

pub struct MemberSpec {
    pub name: Ident,
    pub id: Option<i64>,
    pub seal: Option<bool>,
    pub object: Option<Expr>,
}

// 编译期校验：名称/显式 id 唯一、id 为正整数字面量、选项键合法
pub fn analyze_members(input: &EnumerationInput) -> (Vec<MemberSpec>, Vec<syn::Error>) {
    let mut specs = Vec::new();
    let mut errs = Vec::new();
    if input.members.is_empty() {
        errs.push(syn::Error::new_spanned(&input.host, ERR_EMPTY));
    }
    let mut seen_names: HashMap<String, &Ident> = HashMap::new();
    let mut ids = IdAllocator::default();
    for decl in &input.members {
        let errs_before = errs.len();
        let spec = analyze_member(decl, &mut errs);
        let key = decl.name.to_string();
        if seen_names.insert(key, &decl.name).is_some() {
            errs.push(syn::Error::new_spanned(&decl.name, ERR_DUPLICATE_NAME));
        }
        // 被拒绝的成员不占用 id，与运行期 define 的原子性一致
        if errs.len() == errs_before {
            match spec.id {
                Some(id) => {
                    if !ids.claim(id) {
                        errs.push(syn::Error::new_spanned(&decl.name, ERR_DUPLICATE_ID));
                    }
                }
                None => ids.assign_next(),
            }
        }
        specs.push(spec);
    }
    (specs, errs)
}

// 编译期复现 Registry 的自动分配：计数器停在已分配值上，显式 id 不移动计数器
#[derive(Default)]
struct IdAllocator {
    next_candidate: i64,
    taken: HashSet<i64>,
}

impl IdAllocator {
    fn claim(&mut self, id: i64) -> bool {
        self.taken.insert(id)
    }

    fn assign_next(&mut self) {
        let mut next = self.next_candidate;
        while next <= 0 || self.taken.contains(&next) {
            next += 1;
        }
        self.next_candidate = next;
        self.taken.insert(next);
    }
}

fn analyze_member(decl: &MemberDecl, errs: &mut Vec<syn::Error>) -> MemberSpec {
    let mut id = None;
    let mut seal = None;
    let mut seen: Vec<String> = Vec::new();
    for MemberOption { key, value } in &decl.options {
        let k = key.to_string();
        if seen.contains(&k) {
            errs.push(syn::Error::new_spanned(key, ERR_OPTION_REPEATED));
            continue;
        }
        seen.push(k.clone());
        match k.as_str() {
            "id" => match parse_id(value) {
                Ok(v) => id = Some(v),
                Err(e) => errs.push(e),
            },
            "seal" => match value {
                Expr::Lit(l) => match &l.lit {
                    Lit::Bool(b) => seal = Some(b.value),
                    _ => errs.push(syn::Error::new_spanned(value, ERR_SEAL_NOT_BOOL)),
                },
                _ => errs.push(syn::Error::new_spanned(value, ERR_SEAL_NOT_BOOL)),
            },
            "object" => errs.push(syn::Error::new_spanned(key, ERR_OBJECT_OPTION)),
            _ => errs.push(syn::Error::new_spanned(key, ERR_UNKNOWN_OPTION)),
        }
    }
    MemberSpec {
        name: decl.name.clone(),
        id,
        seal,
        object: decl.object.clone(),
    }
}

fn parse_id(value: &Expr) -> syn::Result<i64> {
    let lit = match value {
        Expr::Lit(l) => match &l.lit {
            Lit::Int(i) => i,
            _ => return Err(syn::Error::new_spanned(value, ERR_ID_NOT_POSITIVE)),
        },
        _ => return Err(syn::Error::new_spanned(value, ERR_ID_NOT_POSITIVE)),
    };
    let id = lit
        .base10_parse::<i64>()
        .map_err(|_| syn::Error::new_spanned(lit, ERR_ID_OUT_OF_RANGE))?;
    if id <= 0 {
        return Err(syn::Error::new_spanned(lit, ERR_ID_NOT_POSITIVE));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(src: &str) -> (Vec<MemberSpec>, Vec<String>) {
        let input: EnumerationInput = syn::parse_str(src).expect("parse");
        let (specs, errs) = analyze_members(&input);
        (specs, errs.into_iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn accepts_plain_and_configured_members() {
        let (specs, errs) = analyze("pub Color { RED, GREEN(id = 5) => Color(1), BLUE(seal = false) }");
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[1].id, Some(5));
        assert!(specs[1].object.is_some());
        assert_eq!(specs[2].seal, Some(false));
        assert_eq!(specs[0].id, None);
    }

    #[test]
    fn rejects_duplicates() {
        let (_, errs) = analyze("Color { RED(id = 2), RED, BLUE(id = 2) }");
        assert!(errs.contains(&ERR_DUPLICATE_NAME.to_string()));
        assert!(errs.contains(&ERR_DUPLICATE_ID.to_string()));
    }

    #[test]
    fn rejects_explicit_id_taken_by_earlier_auto_member() {
        let (_, errs) = analyze("C { A, B(id = 1) }");
        assert_eq!(errs, vec![ERR_DUPLICATE_ID.to_string()]);
        // 计数器不因显式 id 前移：A=1, B=5, C=2, D=3 不冲突；E 撞上 C
        let (_, errs) = analyze("C { A, B(id = 5), C, D(id = 3), E(id = 2) }");
        assert_eq!(errs, vec![ERR_DUPLICATE_ID.to_string()]);
        let (_, errs) = analyze("C { A(id = 2), B, C, D(id = 4) }");
        assert!(errs.is_empty(), "{errs:?}");
    }

    #[test]
    fn rejects_non_positive_and_non_integer_ids() {
        for src in ["C { A(id = 0) }", "C { A(id = -5) }", "C { A(id = 3.5) }", "C { A(id = \"1\") }"] {
            let (_, errs) = analyze(src);
            assert_eq!(errs, vec![ERR_ID_NOT_POSITIVE.to_string()], "{src}");
        }
        let (_, errs) = analyze("C { A(id = 99999999999999999999) }");
        assert_eq!(errs, vec![ERR_ID_OUT_OF_RANGE.to_string()]);
    }

    #[test]
    fn rejects_unknown_and_malformed_options() {
        let (_, errs) = analyze("C { A(color = 1), B(seal = 1), D(object = 1), E(id = 1, id = 2) }");
        assert_eq!(
            errs,
            vec![
                ERR_UNKNOWN_OPTION.to_string(),
                ERR_SEAL_NOT_BOOL.to_string(),
                ERR_OBJECT_OPTION.to_string(),
                ERR_OPTION_REPEATED.to_string(),
            ]
        );
    }

    #[test]
    fn rejects_empty_enumeration() {
        let (_, errs) = analyze("C {}");
        assert_eq!(errs, vec![ERR_EMPTY.to_string()]);
    }
}
