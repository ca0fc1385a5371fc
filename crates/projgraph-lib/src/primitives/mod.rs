//! projgraph primitives - shared configuration types and errors
//!
//! Enums selected on the command line or through the environment, the logger
//! configuration built from them, and the error types of the configuration
//! and logging layers.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use thiserror::Error;

mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line text
    /// alias: text, txt, plain
    Text,

    /// One JSON object per event
    Json,

    /// Multi-line human-oriented layout
    /// alias: yaml, yml, pretty
    Yaml,
}

/// Color intent for reports and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorChoice {
    /// Color when the stream is a terminal that supports it
    /// alias: auto, automatic, detect, default
    #[default]
    Auto,

    /// Always emit ANSI codes
    /// alias: always, force, on
    Always,

    /// Never emit ANSI codes
    /// alias: never, off
    Never,
}

impl ColorChoice {
    /// Whether stdout output should be colored
    pub fn for_stdout(&self) -> bool {
        match self {
            Self::Auto => console::colors_enabled(),
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Whether stderr output should be colored
    pub fn for_stderr(&self) -> bool {
        match self {
            Self::Auto => console::colors_enabled_stderr(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Logger configuration derived from the application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: ColorChoice,
}

impl LoggerConfig {
    /// Whether the selected output stream gets ANSI codes
    pub fn ansi(&self) -> bool {
        if self.format == LogFormat::Json {
            return false;
        }
        match self.output {
            LogOutput::Stderr => self.color.for_stderr(),
            LogOutput::Stdout => self.color.for_stdout(),
        }
    }
}

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Invalid working directory: {path}")]
    InvalidWorkDir { path: String },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to get current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Map the numeric `--log-level` (0-4) to a level; anything above 4 is trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive name understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Error => PossibleValue::new("error").alias("err").alias("fatal"),
            Self::Warning => PossibleValue::new("warn").alias("warning"),
            Self::Info => PossibleValue::new("info").alias("information"),
            Self::Debug => PossibleValue::new("debug"),
            Self::Trace => PossibleValue::new("trace").alias("verbose"),
        })
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Text => PossibleValue::new("text").alias("txt").alias("plain"),
            Self::Json => PossibleValue::new("json"),
            Self::Yaml => PossibleValue::new("yaml").alias("yml").alias("pretty"),
        })
    }
}

impl ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Always, Self::Never]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Auto => PossibleValue::new("auto")
                .alias("automatic")
                .alias("detect")
                .alias("default"),
            Self::Always => PossibleValue::new("always").alias("force").alias("on"),
            Self::Never => PossibleValue::new("never").alias("off"),
        })
    }
}

impl_fromstr_for_value_enum!(LogLevel, "log level");
impl_fromstr_for_value_enum!(LogFormat, "log format");
impl_fromstr_for_value_enum!(LogOutput, "log output stream");
impl_fromstr_for_value_enum!(ColorChoice, "color choice");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
