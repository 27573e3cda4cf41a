use serde_json::Value;

/// Coercion of lookup input into a member id.
///
/// Anything that cannot be read as an integer becomes `0`, which is never a
/// registered id, so the lookup simply misses. Strings are read like a
/// leading integer literal: `" 12abc"` is 12, `"7.5"` is 7, `"abc"` is 0.
pub trait IntoMemberId {
    fn into_member_id(self) -> i64;
}

macro_rules! int_member_id {
    ($($t:ty),*) => {
        $(
            impl IntoMemberId for $t {
                fn into_member_id(self) -> i64 {
                    i64::try_from(self).unwrap_or(0)
                }
            }
        )*
    };
}

int_member_id!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, i128, u128);

impl IntoMemberId for f64 {
    fn into_member_id(self) -> i64 {
        if self.is_finite() {
            // `as` saturates; truncation toward zero
            self.trunc() as i64
        } else {
            0
        }
    }
}

impl IntoMemberId for f32 {
    fn into_member_id(self) -> i64 {
        f64::from(self).into_member_id()
    }
}

impl IntoMemberId for &str {
    fn into_member_id(self) -> i64 {
        leading_integer(self)
    }
}

// 前导整数：可选符号 + 数字（数字之间允许单个 `_`），遇到其他字符即停止
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut prev_digit = false;
    for b in rest.bytes() {
        match b {
            b'0'..=b'9' => {
                let digit = i64::from(b - b'0');
                // 溢出无法表示，按不可转换处理
                value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                    Some(v) => v,
                    None => return 0,
                };
                prev_digit = true;
            }
            b'_' if prev_digit => prev_digit = false,
            _ => break,
        }
    }
    if negative {
        -value
    } else {
        value
    }
}

impl IntoMemberId for &String {
    fn into_member_id(self) -> i64 {
        self.as_str().into_member_id()
    }
}

impl IntoMemberId for String {
    fn into_member_id(self) -> i64 {
        self.as_str().into_member_id()
    }
}

impl IntoMemberId for &Value {
    fn into_member_id(self) -> i64 {
        match self {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(f64::into_member_id))
                .unwrap_or(0),
            Value::String(s) => s.as_str().into_member_id(),
            _ => 0,
        }
    }
}

impl IntoMemberId for Value {
    fn into_member_id(self) -> i64 {
        (&self).into_member_id()
    }
}

#[cfg(test)]
mod tests {
    use super::IntoMemberId;
    use serde_json::json;

    #[test]
    fn numeric_like_input_is_coerced() {
        assert_eq!(5u8.into_member_id(), 5);
        assert_eq!(u64::MAX.into_member_id(), 0);
        assert_eq!(3.9f64.into_member_id(), 3);
        assert_eq!(f64::NAN.into_member_id(), 0);
        assert_eq!(" 42 ".into_member_id(), 42);
        assert_eq!("7.5".into_member_id(), 7);
        assert_eq!("red".into_member_id(), 0);
        assert_eq!("12abc".into_member_id(), 12);
        assert_eq!("-3x".into_member_id(), -3);
        assert_eq!("1_000".into_member_id(), 1000);
        assert_eq!("1__0".into_member_id(), 1);
        assert_eq!("+".into_member_id(), 0);
        assert_eq!("99999999999999999999".into_member_id(), 0);
        assert_eq!(json!(12).into_member_id(), 12);
        assert_eq!(json!("12").into_member_id(), 12);
        assert_eq!(json!(null).into_member_id(), 0);
    }
}
