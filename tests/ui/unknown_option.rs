struct Tier;

enum_field::enumeration! {
    Tier {
        A(color = 1),
        B(seal = "yes"),
    }
}

fn main() {
    let _ = Tier;
}
