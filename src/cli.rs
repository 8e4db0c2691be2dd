//! Helpers shared by the command line tools.

use std::{ffi::OsString, io::Write};

use crate::error::Error;

/// Exit status for a bad invocation.
pub const EXIT_USAGE: i32 = 2;
/// Exit status for a failed conversion.
pub const EXIT_FAILURE: i32 = 1;

/// Split `args` (program name first) into exactly two positional arguments.
///
/// Works on raw `OsString`s so paths that are not valid UTF-8 still reach
/// the tool.
pub fn two_positional<T: Clone>(args: &[T], usage: &str) -> Result<(T, T), Error> {
    match args {
        [_, input, output] => Ok((input.clone(), output.clone())),
        _ => Err(Error::Usage(usage.to_string())),
    }
}

/// Convert an argument that is used as text rather than as a path.
pub fn utf8_argument(arg: OsString) -> Result<String, Error> {
    arg.into_string().map_err(Error::NonUnicodeArgument)
}

/// Initialize `env_logger`, honouring `RUST_LOG` and defaulting to warnings.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}:{}] {} - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Report `err` the way every tool does and return the exit status.
///
/// Usage errors go to stdout as the bare usage line, everything else to
/// stderr.
pub fn report(err: &Error) -> i32 {
    if err.is_usage() {
        println!("{}", err);
        EXIT_USAGE
    } else {
        log::debug!("{:?}", err);
        eprintln!("error: {}", err);
        EXIT_FAILURE
    }
}
