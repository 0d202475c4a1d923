use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DashboardError, Result};
use crate::view::{SortKey, StatusFilter};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub club: ClubConfig,
    pub member: MemberProfile,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClubConfig {
    pub name: String,
    pub tagline: String,
    pub tip: String,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            name: "DevCatalyst".to_string(),
            tagline: "Accelerating Developer Growth".to_string(),
            tip: "Complete tasks on time to earn bonus points and unlock new challenges!"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MemberProfile {
    pub name: String,
    pub member_id: String,
    pub level: String,
    pub points: u32,
}

impl Default for MemberProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            member_id: "DC2024-157".to_string(),
            level: "Intermediate Developer".to_string(),
            points: 245,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardSettings {
    /// Fixed "current" date; the local date is used when absent.
    pub today: Option<NaiveDate>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

impl Config {
    /// Load from `path` if given (it must exist), otherwise from the user
    /// config directory if a file is there, otherwise defaults.
    #[tracing::instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(DashboardError::ConfigNotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("no config file found; using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!(config = %path.display(), "loading config");
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn initial_filter(&self) -> Result<StatusFilter> {
        self.dashboard
            .filter
            .as_deref()
            .map_or(Ok(StatusFilter::default()), str::parse)
    }

    pub fn initial_sort(&self) -> Result<SortKey> {
        self.dashboard
            .sort
            .as_deref()
            .map_or(Ok(SortKey::default()), str::parse)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devcatalyst").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Status;
    use std::io::Write;

    #[test]
    fn defaults_match_sample_member() {
        let config = Config::default();
        assert_eq!(config.club.name, "DevCatalyst");
        assert_eq!(config.member.name, "Alex Johnson");
        assert_eq!(config.member.member_id, "DC2024-157");
        assert_eq!(config.member.points, 245);
        assert_eq!(config.dashboard.today, None);
        assert_eq!(config.initial_filter().unwrap(), StatusFilter::All);
        assert_eq!(config.initial_sort().unwrap(), SortKey::DueDate);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[member]\nname = \"Sam Lee\"\n\n[dashboard]\ntoday = \"2024-08-20\"\nfilter = \"In Progress\"\nsort = \"points\""
        )
        .unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.member.name, "Sam Lee");
        assert_eq!(config.member.level, "Intermediate Developer");
        assert_eq!(config.club, ClubConfig::default());
        assert_eq!(config.dashboard.today, NaiveDate::from_ymd_opt(2024, 8, 20));
        assert_eq!(
            config.initial_filter().unwrap(),
            StatusFilter::Only(Status::InProgress)
        );
        assert_eq!(config.initial_sort().unwrap(), SortKey::Points);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[member]\npoints = \"lots\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn bad_filter_value_is_reported() {
        let config = Config {
            dashboard: DashboardSettings {
                filter: Some("Blocked".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.initial_filter(),
            Err(DashboardError::UnknownFilter(_))
        ));
    }
}
