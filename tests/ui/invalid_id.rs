struct Tier;

enum_field::enumeration! {
    Tier {
        A(id = 0),
        B(id = -5),
        C(id = 3.5),
    }
}

fn main() {
    let _ = Tier;
}
