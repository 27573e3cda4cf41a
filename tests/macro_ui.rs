//! Compile tests for enumeration!

#[test]
fn ui_enumeration_default_members_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/happy_min.rs");
}

#[test]
fn ui_enumeration_objects_without_default_ok() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/objects_only.rs");
}

#[test]
fn ui_enumeration_duplicate_name_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/duplicate_name.rs");
}

#[test]
fn ui_enumeration_duplicate_id_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/duplicate_id.rs");
}

#[test]
fn ui_enumeration_invalid_id_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/invalid_id.rs");
}

#[test]
fn ui_enumeration_unknown_option_fails() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/unknown_option.rs");
}
