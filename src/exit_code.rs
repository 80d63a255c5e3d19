pub const SUCCESS: ExitCode = ExitCode(0);
pub const FAILURE: ExitCode = ExitCode(1);

/// Status that a demo program terminates with. Usage errors and rejected preconditions both map
/// to `FAILURE`; panics get whatever status the runtime gives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub fn code(&self) -> i32 {
        self.0
    }
}

/// Terminates the process with `code`.
pub fn exit(code: ExitCode) -> ! {
    std::process::exit(code.code())
}
