use basket_logger::{Logger, LoggerError};

#[test]
fn init_without_any_output_is_rejected() {
    let err = Logger::builder()
        .name("basket-silent")
        .console(false)
        .init()
        .expect_err("a logger with no outputs is a configuration error");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
