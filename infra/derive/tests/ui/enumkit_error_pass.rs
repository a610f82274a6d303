use enumkit_derive::enumkit_error;
use std::borrow::Cow;

#[enumkit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk"))
}

fn main() {
    let err = read().context("Reading catalog").unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.context(), Some("Reading catalog"));
    assert_eq!(err.to_string(), "IO error (Reading catalog): disk");

    let missing: Result<(), DemoError> =
        Err(DemoError::Missing { message: "deck".into(), context: None });
    assert_eq!(missing.context("Dealing").unwrap_err().to_string(), "Missing (Dealing): deck");

    assert_eq!(DemoError::from("boom").kind(), "Internal");
}
