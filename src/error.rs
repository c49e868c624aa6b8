use std::error::Error;

use log::SetLoggerError;
use rusoto_core::region::ParseRegionError;
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum ReporterError {
    NoneValue,
    DescribeInstancesError(RusotoError<DescribeInstancesError>),
}

impl Display for ReporterError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            ReporterError::NoneValue => write!(f, "Value is None"),
            ReporterError::DescribeInstancesError(ref error) => Display::fmt(error, f),
        }
    }
}

impl Error for ReporterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ReporterError::DescribeInstancesError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<DescribeInstancesError>> for ReporterError {
    fn from(e: RusotoError<DescribeInstancesError>) -> ReporterError {
        ReporterError::DescribeInstancesError(e)
    }
}

/// Raised while resolving settings, before any invocation is accepted.
#[derive(Debug)]
pub enum StartupError {
    InvalidRegion(ParseRegionError),
    InvalidLogLevel(String),
    Logger(SetLoggerError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            StartupError::InvalidRegion(ref error) => {
                write!(f, "configuration error, {}", error)
            }
            StartupError::InvalidLogLevel(ref level) => {
                write!(f, "configuration error, unknown log level: {}", level)
            }
            StartupError::Logger(ref error) => write!(f, "Failed to init logger: {}", error),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            StartupError::InvalidRegion(ref error) => Some(error),
            StartupError::Logger(ref error) => Some(error),
            StartupError::InvalidLogLevel(_) => None,
        }
    }
}

impl From<ParseRegionError> for StartupError {
    fn from(e: ParseRegionError) -> StartupError {
        StartupError::InvalidRegion(e)
    }
}

impl From<SetLoggerError> for StartupError {
    fn from(e: SetLoggerError) -> StartupError {
        StartupError::Logger(e)
    }
}
