/***************************************/
/*               Macros                */
/***************************************/
/// Unwraps a `Result`, or logs the error and terminates the process.
/// An optional context string is prefixed to the logged error.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, "ERROR")
    };
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
