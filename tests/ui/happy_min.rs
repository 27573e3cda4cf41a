use enum_field::prelude::*;

#[derive(Debug, Default)]
struct Mode;

enum_field::enumeration! {
    Mode {
        NORMAL,
        INSERT(id = 2, seal = true),
    }
}

fn main() {
    assert_eq!(Mode::INSERT().id(), 2);
    assert_eq!(Mode::all().len(), 2);
}
