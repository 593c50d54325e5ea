use basket_derive::basket_error;
use std::borrow::Cow;

#[basket_error]
pub enum LedgerError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8, LedgerError> {
    raw.parse::<u8>().context("Parsing quantity")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().contains("(Parsing quantity)"));

    let internal: LedgerError = "boom".into();
    assert!(matches!(internal, LedgerError::Internal { .. }));
}
