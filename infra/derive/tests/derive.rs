#[test]
fn derive_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/enumeration_pass.rs");
    t.pass("tests/ui/map_value_pass.rs");
    t.pass("tests/ui/enumkit_error_pass.rs");
}
