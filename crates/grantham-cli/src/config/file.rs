use crate::error::{CliError, Result};
use grantham::core::config::MatrixFormat;
use grantham::core::models::amino_acid::AminoAcid;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileDisplayConfig {
    pub classify: Option<bool>,
    #[serde(rename = "matrix-format")]
    pub matrix_format: Option<MatrixFormat>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(rename = "default-wildtype")]
    pub default_wildtype: Option<AminoAcid>,
    #[serde(rename = "default-mutant")]
    pub default_mutant: Option<AminoAcid>,
    pub display: Option<FileDisplayConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
