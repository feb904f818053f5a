//! Process exit codes

use std::process;

/// Standard Unix exit codes used by the CLI shell.
#[derive(Debug, Clone, Copy)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidUsage = 2,
}

impl ExitCode {
    pub fn exit(self) -> ! {
        process::exit(self as i32)
    }
}
