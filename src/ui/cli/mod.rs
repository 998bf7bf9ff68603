// Fri Oct 16 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, Command, TreeArgs};
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

/// Exit status: 0 clean, 1 violations, 2 usage or environment error.
pub fn run() -> i32 {
    let args = parse_args();
    let handler = CommandHandler::new();
    match handler.execute(args) {
        Ok(report) => report.exit_code(),
        Err(e) => {
            handler.report_error(&e);
            2
        }
    }
}
