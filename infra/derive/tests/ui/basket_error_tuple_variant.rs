use basket_derive::basket_error;

#[basket_error]
pub enum LedgerError {
    #[error("Parse error: {0}")]
    Parse(std::num::ParseIntError),
}

fn main() {}
