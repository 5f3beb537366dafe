use crate::config::models::AppConfig;
use crate::error::Result;
use std::io::{self, Write};

pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    write_env(&mut stdout.lock(), config)
}

pub fn write_env<W: Write>(out: &mut W, config: &AppConfig) -> Result<()> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let config_file = config
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    writeln!(out, "grantham CLI:    v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "grantham core:   v{}", grantham::VERSION)?;
    writeln!(
        out,
        "Target:          {}-{} ({})",
        std::env::consts::ARCH,
        std::env::consts::OS,
        std::env::consts::FAMILY
    )?;
    writeln!(out, "Build profile:   {}", profile)?;
    writeln!(out, "Config file:     {}", config_file)?;
    writeln!(out, "Matrix format:   {}", config.display.matrix_format)?;
    writeln!(out, "Classification:  {}", config.display.classify)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builder::build_config;
    use crate::config::models::CliOverrides;

    #[test]
    fn reports_versions_and_resolved_settings() {
        let config = build_config(None, &[], CliOverrides::default()).unwrap();
        let mut buf = Vec::new();
        write_env(&mut buf, &config).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains(grantham::VERSION));
        assert!(text.contains(std::env::consts::OS));
        assert!(text.contains("Config file:     (none)"));
        assert!(text.contains("Matrix format:   table"));
    }
}
