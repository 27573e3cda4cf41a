struct Tier;

enum_field::enumeration! {
    Tier {
        BASIC,
        GOLD(id = 1),
        SILVER(id = 7),
        PLATINUM(id = 7),
    }
}

fn main() {
    let _ = Tier;
}
