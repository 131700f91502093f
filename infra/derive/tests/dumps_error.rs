#[test]
fn dumps_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/dumps_error_pass.rs");
}
