use crate::core::models::amino_acid::AminoAcid;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown matrix format '{0}'. Expected 'table' or 'csv'.")]
    UnknownMatrixFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatrixFormat {
    #[default]
    Table,
    Csv,
}

impl FromStr for MatrixFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            _ => Err(ConfigError::UnknownMatrixFormat(s.to_string())),
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Csv => "csv",
        })
    }
}

/// Presentation settings resolved from defaults, config files and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub classify: bool,
    pub matrix_format: MatrixFormat,
    pub default_wildtype: Option<AminoAcid>,
    pub default_mutant: Option<AminoAcid>,
}

#[derive(Default)]
pub struct DisplayConfigBuilder {
    classify: Option<bool>,
    matrix_format: Option<MatrixFormat>,
    default_wildtype: Option<AminoAcid>,
    default_mutant: Option<AminoAcid>,
}

impl DisplayConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(mut self, classify: bool) -> Self {
        self.classify = Some(classify);
        self
    }
    pub fn matrix_format(mut self, format: MatrixFormat) -> Self {
        self.matrix_format = Some(format);
        self
    }
    pub fn default_wildtype(mut self, aa: Option<AminoAcid>) -> Self {
        self.default_wildtype = aa;
        self
    }
    pub fn default_mutant(mut self, aa: Option<AminoAcid>) -> Self {
        self.default_mutant = aa;
        self
    }

    pub fn build(self) -> Result<DisplayConfig, ConfigError> {
        Ok(DisplayConfig {
            classify: self
                .classify
                .ok_or(ConfigError::MissingParameter("classify"))?,
            matrix_format: self
                .matrix_format
                .ok_or(ConfigError::MissingParameter("matrix_format"))?,
            default_wildtype: self.default_wildtype,
            default_mutant: self.default_mutant,
        })
    }
}
