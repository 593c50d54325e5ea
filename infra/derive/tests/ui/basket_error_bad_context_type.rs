use basket_derive::basket_error;

#[basket_error]
pub enum LedgerError {
    #[error("Parse error: {source}")]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<String>,
    },
}

fn main() {}
