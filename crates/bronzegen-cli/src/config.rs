//! Optional TOML file with defaults shared by every subcommand.
//!
//! ```toml
//! seed = 7
//! start = "2024-06-01 09:00:00"
//! end = "2024-06-01 21:00:00"
//! out_dir = "data/bronze"
//! ```
//!
//! Values given on the command line always win.

use std::path::{Path, PathBuf};

use bronzegen_core::parse_timestamp;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub seed: Option<u64>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub out_dir: Option<PathBuf>,
}

impl Defaults {
    /// Read defaults from `path`, or return empty defaults when no file is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CliError::ConfigDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn start(&self) -> Result<Option<NaiveDateTime>, CliError> {
        parse_optional(self.start.as_deref())
    }

    pub fn end(&self) -> Result<Option<NaiveDateTime>, CliError> {
        parse_optional(self.end.as_deref())
    }

    /// Destination for a dataset when no explicit output path is given.
    pub fn output_for(&self, file_name: &str) -> Option<PathBuf> {
        self.out_dir.as_ref().map(|dir| dir.join(file_name))
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<NaiveDateTime>, CliError> {
    value
        .map(|value| parse_timestamp(value).map_err(|err| CliError::Usage(err.to_string())))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let defaults = Defaults::parse("").expect("parse empty config");
        assert_eq!(defaults, Defaults::default());
        assert_eq!(defaults.output_for("bronze_books.csv"), None);
    }

    #[test]
    fn parses_all_keys() {
        let defaults = Defaults::parse(
            r#"
seed = 7
start = "2024-06-01 09:00:00"
end = "2024-06-01 21:00:00"
out_dir = "data/bronze"
"#,
        )
        .expect("parse config");

        assert_eq!(defaults.seed, Some(7));
        assert_eq!(
            defaults.start().expect("start"),
            Some(parse_timestamp("2024-06-01 09:00:00").expect("timestamp"))
        );
        assert_eq!(
            defaults.output_for("bronze_stores.csv"),
            Some(PathBuf::from("data/bronze").join("bronze_stores.csv"))
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Defaults::parse("sead = 1").is_err());
    }

    #[test]
    fn bad_timestamp_is_a_usage_error() {
        let defaults = Defaults {
            end: Some("yesterday".to_string()),
            ..Defaults::default()
        };
        assert!(matches!(defaults.end(), Err(CliError::Usage(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let path = std::env::temp_dir().join(format!("bronzegen_{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(
            Defaults::load(Some(&path)),
            Err(CliError::ConfigRead { .. })
        ));
    }
}
