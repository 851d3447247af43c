use anyhow::Error;
use okved_config::ConfigError;
use okved_core::ErrorInfo;
use okved_source::SourceError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("could not load the reference list: {0}\ncheck your internet connection and try again")]
    ReferenceUnavailable(String),
    #[error("{}: {}", .0.kind.as_code(), .0.message)]
    Round(ErrorInfo),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn reference_unavailable(err: SourceError) -> Error {
    CliError::ReferenceUnavailable(err.to_string()).into()
}

pub fn round_failed(info: ErrorInfo) -> Error {
    CliError::Round(info).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::ReferenceUnavailable(_) => EXIT_FAILURE,
                CliError::Round(info) if info.kind.is_input_error() => EXIT_INVALID_INPUT,
                CliError::Round(_) => EXIT_FAILURE,
            };
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidReferenceUrl(_)
        | ConfigError::InvalidTimeout(_)
        | ConfigError::InvalidMaxBytes(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
