use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use sov_voting_system::MAX_VOTERS;

fn default_max_voters() -> u64 {
    MAX_VOTERS
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// Seed the admin address is derived from.
    pub admin_key: String,
    /// Candidates registered in order, so the first one gets id 0.
    pub candidates: Vec<String>,
    /// Cap on the total number of votes.
    #[serde(default = "default_max_voters")]
    pub max_voters: u64,
    /// Number of distinct voters to run. Defaults to one more than the cap.
    pub voters: Option<u64>,
}

impl DemoConfig {
    /// Voters to run when the command line doesn't override it.
    pub fn voter_count(&self) -> u64 {
        self.voters
            .unwrap_or_else(|| self.max_voters.saturating_add(1))
    }
}

/// Reads a TOML file and deserializes it into `R`.
pub fn from_toml_path<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> anyhow::Result<R> {
    let mut contents = String::new();
    {
        let mut file = File::open(path)?;
        file.read_to_string(&mut contents)?;
    }

    let result: R = toml::from_str(&contents)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn create_config_from(content: &str) -> NamedTempFile {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file.write_all(content.as_bytes()).unwrap();
        config_file
    }

    #[test]
    fn test_correct_config() {
        let config = r#"
            admin_key = "admin"
            candidates = ["Alice", "Bob"]
            max_voters = 5
            voters = 7
        "#;

        let config_file = create_config_from(config);

        let config: DemoConfig = from_toml_path(config_file.path()).unwrap();
        let expected = DemoConfig {
            admin_key: "admin".to_string(),
            candidates: vec!["Alice".to_string(), "Bob".to_string()],
            max_voters: 5,
            voters: Some(7),
        };
        assert_eq!(config, expected);
        assert_eq!(config.voter_count(), 7);
    }

    #[test]
    fn test_defaults() {
        let config = r#"
            admin_key = "admin"
            candidates = ["Alice"]
        "#;

        let config_file = create_config_from(config);

        let config: DemoConfig = from_toml_path(config_file.path()).unwrap();
        assert_eq!(config.max_voters, MAX_VOTERS);
        assert_eq!(config.voter_count(), MAX_VOTERS + 1);
    }

    #[test]
    fn test_missing_file() {
        let result: anyhow::Result<DemoConfig> = from_toml_path("/definitely/not/here.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("voting_config.toml");
        let config: DemoConfig = from_toml_path(path).unwrap();
        assert_eq!(config.candidates.len(), 4);
        assert_eq!(config.voter_count(), 21);
    }
}
