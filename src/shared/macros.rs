/***************************************/
/*               Macros                */
/***************************************/

/// Logs the error and terminates the process. Only used during startup.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{:#}", e);
                std::process::exit(1);
            }
        }
    };
}
