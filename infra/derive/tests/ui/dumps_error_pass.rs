use dumps_derive::dumps_error;
use std::borrow::Cow;

#[dumps_error]
pub enum DemoError {
    #[error("Document missing{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<Vec<u8>, DemoError> {
    std::fs::read("/definitely/not/here.json").context("reading demo document")
}

fn main() {
    let err = read().expect_err("file should be missing");
    assert!(err.to_string().contains("(reading demo document)"));

    let internal: DemoError = "boom".into();
    assert!(matches!(internal, DemoError::Internal { .. }));

    let missing: Result<(), DemoError> =
        Err(DemoError::NotFound { message: "engines.json".into(), context: None });
    let err = missing.context("listing").expect_err("still an error");
    assert_eq!(err.to_string(), "Document missing (listing): engines.json");
}
