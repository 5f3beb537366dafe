use grantham::core::config::MatrixFormat;

pub struct DefaultsConfig {
    pub classify: bool,
    pub matrix_format: MatrixFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            classify: false,
            matrix_format: MatrixFormat::Table,
        }
    }
}
