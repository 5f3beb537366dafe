use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, CliOverrides};
use crate::error::{CliError, Result};
use grantham::core::config::DisplayConfigBuilder;
use std::path::Path;
use tracing::debug;

/// Merges hard defaults, the optional config file, `--set` values and CLI flags,
/// in increasing order of precedence.
pub fn build_config(
    config_path: Option<&Path>,
    set_values: &[String],
    overrides: CliOverrides,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, set_values)?;
    let display_file = file_config.display.take().unwrap_or_default();

    let classify = overrides.classify
        || display_file.classify.unwrap_or(defaults.classify);
    let matrix_format = overrides
        .matrix_format
        .or(display_file.matrix_format)
        .unwrap_or(defaults.matrix_format);

    let display_config = DisplayConfigBuilder::new()
        .classify(classify)
        .matrix_format(matrix_format)
        .default_wildtype(file_config.default_wildtype)
        .default_mutant(file_config.default_mutant)
        .build()?;
    debug!("Resolved display configuration: {:?}", display_config);

    Ok(AppConfig {
        config_path: config_path.map(Path::to_path_buf),
        display: display_config,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "default-wildtype" => {
                config.default_wildtype = Some(value_str.parse().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "default-mutant" => {
                config.default_mutant = Some(value_str.parse().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "display.classify" => {
                config
                    .display
                    .get_or_insert_with(Default::default)
                    .classify = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "display.matrix-format" => {
                config
                    .display
                    .get_or_insert_with(Default::default)
                    .matrix_format = Some(value_str.parse()?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantham::core::config::MatrixFormat;
    use grantham::core::models::amino_acid::AminoAcid;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("grantham.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_file_or_overrides() {
        let app = build_config(None, &[], CliOverrides::default()).expect("build ok");
        assert!(app.config_path.is_none());
        assert_eq!(app.display.classify, DefaultsConfig::default().classify);
        assert_eq!(
            app.display.matrix_format,
            DefaultsConfig::default().matrix_format
        );
        assert_eq!(app.display.default_wildtype, None);
        assert_eq!(app.display.default_mutant, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            default-wildtype = "Trp"
            default-mutant = "Tyr"
            [display]
            classify = true
            matrix-format = "csv"
            "#,
        );

        let app = build_config(Some(&path), &[], CliOverrides::default()).expect("build ok");
        assert_eq!(app.config_path.as_deref(), Some(path.as_path()));
        assert!(app.display.classify);
        assert_eq!(app.display.matrix_format, MatrixFormat::Csv);
        assert_eq!(app.display.default_wildtype, Some(AminoAcid::Tryptophan));
        assert_eq!(app.display.default_mutant, Some(AminoAcid::Tyrosine));
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
            default-wildtype = "Trp"
            [display]
            matrix-format = "csv"
            "#,
        );
        let set_values = vec![
            "default-wildtype=Ile".to_string(),
            "default-mutant=L".to_string(),
            "display.matrix-format=table".to_string(),
            "display.classify=true".to_string(),
        ];

        let app =
            build_config(Some(&path), &set_values, CliOverrides::default()).expect("build ok");
        assert_eq!(app.display.default_wildtype, Some(AminoAcid::Isoleucine));
        assert_eq!(app.display.default_mutant, Some(AminoAcid::Leucine));
        assert_eq!(app.display.matrix_format, MatrixFormat::Table);
        assert!(app.display.classify);
    }

    #[test]
    fn cli_flags_override_everything() {
        let set_values = vec!["display.matrix-format=table".to_string()];
        let overrides = CliOverrides {
            classify: true,
            matrix_format: Some(MatrixFormat::Csv),
        };

        let app = build_config(None, &set_values, overrides).expect("build ok");
        assert!(app.display.classify);
        assert_eq!(app.display.matrix_format, MatrixFormat::Csv);
    }

    #[test]
    fn resolved_config_is_logged_at_debug() {
        use std::sync::Mutex;
        use tracing_subscriber::prelude::*;

        let dir = tempdir().unwrap();
        let log_path = dir.path().join("config.log");
        let file = fs::File::create(&log_path).unwrap();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, || {
            build_config(None, &["display.classify=true".to_string()], CliOverrides::default())
                .expect("build ok");
        });

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Resolved display configuration"));
        assert!(content.contains("classify: true"));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let err = build_config(None, &["display.classify".to_string()], CliOverrides::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("KEY=VALUE")));
    }

    #[test]
    fn unsupported_set_key_is_rejected() {
        let err = build_config(None, &["colour=red".to_string()], CliOverrides::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("colour")));
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in [
            "display.classify=maybe",
            "display.matrix-format=json",
            "default-mutant=Xaa",
        ] {
            let result = build_config(None, &[bad.to_string()], CliOverrides::default());
            assert!(matches!(result, Err(CliError::Config(_))), "{}", bad);
        }
    }
}
