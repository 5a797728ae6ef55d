// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Presentation operations (navigation, timers, pickers) are total and never
//! fail. Errors only come from the ambient layers: reading or writing the
//! preferences file, parsing the command line and loading translations.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("CLI Error: {0}")]
    Cli(String),
    #[error("I18n Error: {0}")]
    I18n(String),
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced as a
    /// start-up warning.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Config(_) => "warning-config-load",
            Error::Cli(_) => "warning-cli-invalid",
            Error::I18n(_) => "warning-i18n-load",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Cli(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn cli_error_from_pico_args() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Cli(_)));
        assert_eq!(err.i18n_key(), "warning-cli-invalid");
    }

    #[test]
    fn io_and_config_share_the_config_warning_key() {
        assert_eq!(Error::Io("x".into()).i18n_key(), "warning-config-load");
        assert_eq!(Error::Config("x".into()).i18n_key(), "warning-config-load");
    }
}
