use enum_field::prelude::*;

// 没有 Default：所有成员都显式给出 object
#[derive(Debug)]
struct Unit {
    symbol: &'static str,
}

enum_field::enumeration! {
    pub Unit {
        METER => Unit { symbol: "m" },
        SECOND(id = 10) => Unit { symbol: "s" },
    }
}

fn main() {
    assert_eq!(Unit::METER().with(|u| u.symbol), "m");
    assert_eq!(Unit::find(10).map(|m| m.name()), Ok("SECOND"));
}
