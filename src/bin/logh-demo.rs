#![deny(unsafe_code)]

//! Replays the reference logging scenario through every macro.
//!
//! Configuration comes from the `LOGH_*` environment variables; an invalid
//! value is reported on stderr and the process exits with status 2.

use mimalloc::MiMalloc;

/// High-performance memory allocator for improved allocation throughput.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::process::ExitCode;

use logging::{Stream, dbg_log, error_log, group_log, info_log, log, todo_log, warn_log};

fn main() -> ExitCode {
    if let Err(error) = logging::init_from_env() {
        eprintln!("logh-demo: {error}");
        return ExitCode::from(2);
    }

    log!(Stream::Stdout, "hello world: ", 1, ", ", 2);
    info_log!("info message");
    warn_log!("warn message");
    error_log!("error message");
    todo_log!("todo message");

    group_log!(Default, "info group message");
    group_log!(Extra, "info group message");
    group_log!(Inactive, "this message should not be displayed!");

    let i = 8;
    info_log!(i);
    error_log!("i = ", i);
    dbg_log!("debug message");
    dbg_log!(i);
    let v: Vec<(i32, i32)> = vec![(1, 1), (2, 2), (3, 3)];
    dbg_log!(v);
    log!(Stream::Stdout, "hello world: ", 1, ", ", 2, ", ", v);

    logging::logger().flush();
    ExitCode::SUCCESS
}
