//! Conversion configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output file name when none is configured
pub const DEFAULT_OUTPUT: &str = "workout_program.json";

/// Main conversion configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ConvertConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ConvertConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Input spreadsheet path, required before converting
    pub fn input_path(&self) -> Result<&Path> {
        self.input
            .path
            .as_deref()
            .context("No input spreadsheet given (pass FILE or set input.path)")
    }

    /// Output path, falling back to [`DEFAULT_OUTPUT`]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Check that the configuration can drive a conversion into the output file
    pub fn validate(&self) -> Result<()> {
        self.validate_input()?;

        let input = self.input_path()?;
        if input == self.output_path().as_path() {
            anyhow::bail!(
                "Configuration error: output path '{}' would overwrite the input spreadsheet",
                input.display()
            );
        }

        Ok(())
    }

    /// Check only the input side, for conversions that write no file
    pub fn validate_input(&self) -> Result<()> {
        self.input_path()?;

        if let Some(sheet) = &self.input.sheet {
            if sheet.trim().is_empty() {
                anyhow::bail!("Configuration error: input.sheet must not be empty");
            }
        }

        Ok(())
    }
}

/// Where and how to read the workout sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Sheet name (first sheet when unset)
    #[serde(default)]
    pub sheet: Option<String>,
    /// Rows above the data holding column captions
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            sheet: None,
            header_rows: default_header_rows(),
        }
    }
}

fn default_header_rows() -> usize {
    1
}

/// Where to write the JSON program
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.input.header_rows, 1);
        assert!(config.input.sheet.is_none());
        assert_eq!(config.output_path(), PathBuf::from("workout_program.json"));
        assert!(config.input_path().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config = ConvertConfig::from_toml_str(
            r#"
            [input]
            path = "Antrenman.xlsx"
            sheet = "Program"

            [output]
            path = "out/program.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.input_path().unwrap(), Path::new("Antrenman.xlsx"));
        assert_eq!(config.input.sheet.as_deref(), Some("Program"));
        assert_eq!(config.input.header_rows, 1);
        assert_eq!(config.output_path(), PathBuf::from("out/program.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = ConvertConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ConvertConfig::from_toml_str("[input]\nsheets = \"x\"\n").is_err());
    }

    #[test]
    fn test_validation() {
        // Missing input
        assert!(ConvertConfig::default().validate().is_err());

        // Output overwrites input
        let mut config = ConvertConfig::default();
        config.input.path = Some(PathBuf::from("plan.xlsx"));
        config.output.path = Some(PathBuf::from("plan.xlsx"));
        assert!(config.validate().is_err());

        // Blank sheet name
        let mut config = ConvertConfig::default();
        config.input.path = Some(PathBuf::from("plan.xlsx"));
        config.input.sheet = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_input_ignores_output_path() {
        let mut config = ConvertConfig::default();
        config.input.path = Some(PathBuf::from("plan.xlsx"));
        config.output.path = Some(PathBuf::from("plan.xlsx"));

        assert!(config.validate().is_err());
        assert!(config.validate_input().is_ok());

        config.input.sheet = Some(String::new());
        assert!(config.validate_input().is_err());
        assert!(ConvertConfig::default().validate_input().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitsheet.toml");
        fs::write(&path, "[input]\nheader_rows = 2\n").unwrap();

        let config = ConvertConfig::from_file(&path).unwrap();
        assert_eq!(config.input.header_rows, 2);

        let err = ConvertConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
