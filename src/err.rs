use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum RqErr {
    #[error("[Token] Unknown token: {0}")]
    UnknownToken(String),

    #[error("[Input Token] Duplicated input token: {0}")]
    DuplicatedInput(String),

    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Missing Arg] At least one value for argument `{arg}` is required for cmd `{cmd}`")]
    ArgNotEnough { cmd: &'static str, arg: &'static str },
}

impl Termination for RqErr {
    fn report(self) -> ExitCode {
        eprintln!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl RqErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    fn exit_code(&self) -> u8 {
        let mut code = 1u8..;
        match self {
            RqErr::UnknownToken(_) => code.next().unwrap(),
            RqErr::DuplicatedInput(_) => code.next().unwrap(),
            RqErr::ArgParseErr { .. } => code.next().unwrap(),
            RqErr::MissingArg { .. } => code.next().unwrap(),
            RqErr::ArgNotEnough { .. } => code.next().unwrap(),
        }
    }
}
