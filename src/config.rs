use std::env;
use std::str::FromStr;

use log::Level;
use rusoto_core::Region;

use crate::error::StartupError;

const DEFAULT_REGION: &str = "us-east-1";
const REGION_KEYS: [&'static str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];
const ENDPOINT_KEY: &str = "EC2_ENDPOINT_URL";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub region: Region,
    pub log_level: Level,
}

impl Settings {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let name = REGION_KEYS
            .iter()
            .find_map(|key| lookup(*key))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let region = Region::from_str(name.trim())?;
        let region = match lookup(ENDPOINT_KEY) {
            Some(endpoint) => Region::Custom {
                name: region.name().to_string(),
                endpoint,
            },
            None => region,
        };

        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(level) => {
                Level::from_str(level.trim()).map_err(|_| StartupError::InvalidLogLevel(level))?
            }
            None => Level::Info,
        };

        Ok(Settings { region, log_level })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::error::StartupError;
    use log::Level;
    use rusoto_core::Region;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, StartupError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_us_east_1() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(
            settings,
            Settings {
                region: Region::UsEast1,
                log_level: Level::Info,
            }
        );
    }

    #[test]
    fn test_aws_region_wins_over_default_region() {
        let settings = settings_from(&[
            ("AWS_REGION", "ap-northeast-1"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ])
        .unwrap();
        assert_eq!(settings.region, Region::ApNortheast1);

        let settings = settings_from(&[("AWS_DEFAULT_REGION", "eu-west-1")]).unwrap();
        assert_eq!(settings.region, Region::EuWest1);
    }

    #[test]
    fn test_endpoint_override() {
        let settings = settings_from(&[
            ("AWS_REGION", "us-west-2"),
            ("EC2_ENDPOINT_URL", "http://localhost:4566"),
        ])
        .unwrap();
        assert_eq!(
            settings.region,
            Region::Custom {
                name: "us-west-2".to_string(),
                endpoint: "http://localhost:4566".to_string(),
            }
        );
    }

    #[test]
    fn test_log_level() {
        let settings = settings_from(&[("LOG_LEVEL", "DEBUG")]).unwrap();
        assert_eq!(settings.log_level, Level::Debug);
    }

    #[test]
    fn test_invalid_region_is_startup_error() {
        let result = settings_from(&[("AWS_REGION", "moon-base-1")]);
        match result {
            Err(StartupError::InvalidRegion(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_log_level_is_startup_error() {
        let result = settings_from(&[("LOG_LEVEL", "loud")]);
        match result {
            Err(StartupError::InvalidLogLevel(level)) => assert_eq!(level, "loud"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
