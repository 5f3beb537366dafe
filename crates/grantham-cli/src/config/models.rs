use grantham::core::config::{DisplayConfig, MatrixFormat};
use std::path::PathBuf;

/// Flags given directly on the command line; these win over every other source.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub classify: bool,
    pub matrix_format: Option<MatrixFormat>,
}

#[derive(Debug)]
pub struct AppConfig {
    pub config_path: Option<PathBuf>,
    pub display: DisplayConfig,
}
