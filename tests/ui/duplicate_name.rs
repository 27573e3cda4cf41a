struct Tier;

enum_field::enumeration! {
    Tier {
        BASIC,
        BASIC(id = 2),
    }
}

fn main() {
    let _ = Tier;
}
