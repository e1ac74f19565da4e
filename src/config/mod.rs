mod types;

pub use types::*;

use crate::error::{Error, Result};
use crate::report::{Event, Reporter};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML or JSON file.
///
/// Files ending in `.json` are parsed as JSON; anything else as TOML.
pub fn load_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::config_unavailable(path, e))?;

    let config = parse_config(&content, is_json(path))
        .map_err(|reason| Error::config_unavailable(path, reason))?;

    validate_config(&config).map_err(|reason| Error::config_unavailable(path, reason))?;

    Ok(config)
}

/// Load config from `custom_path` or the default locations.
///
/// Never fails: an unreadable, malformed or invalid file is reported as
/// [`Error::ConfigUnavailable`] and the default config is used instead.
pub fn load_config_or_default(custom_path: Option<&Path>, reporter: &dyn Reporter) -> Config {
    let path = match custom_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config(),
    };

    let Some(path) = path else {
        tracing::debug!("No config file found; using defaults");
        return Config::default();
    };

    match load_config(&path) {
        Ok(config) => {
            reporter.report(&Event::ConfigLoaded { path: &path });
            config
        }
        Err(err) => {
            reporter.report(&Event::Failure(&err));
            Config::default()
        }
    }
}

fn find_default_config() -> Option<PathBuf> {
    let default_paths = [
        "./config.toml",
        "./clipseq.toml",
        "./config.json",
        "~/.config/clipseq/config.toml",
    ];

    default_paths
        .iter()
        .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
        .find(|p| p.exists())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Parse config text as JSON or TOML.
pub fn parse_config(content: &str, json: bool) -> std::result::Result<Config, String> {
    if json {
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))
    } else {
        toml::from_str(content).map_err(|e| format!("invalid TOML: {}", e))
    }
}

/// Validate configuration.
///
/// Hard errors reject the template; soft issues only log a warning.
pub fn validate_config(config: &Config) -> std::result::Result<(), String> {
    validate_template(&config.filename_template)?;

    if config.folder_path.as_os_str().is_empty() {
        tracing::warn!("folder_path is not set");
    } else if !config.folder_path.is_dir() {
        tracing::warn!("folder_path does not exist: {:?}", config.folder_path);
    }

    if !clipseq_av::template::placeholders(&config.filename_template).contains(&"number") {
        tracing::warn!(
            "filename_template has no {{number}} placeholder; planned names are likely to collide"
        );
    }

    Ok(())
}

/// Check that a filename template is usable.
pub fn validate_template(template: &str) -> std::result::Result<(), String> {
    if template.trim().is_empty() {
        return Err("filename_template is empty".to_string());
    }

    if template.contains('/') || template.contains('\\') {
        return Err(format!(
            "filename_template must not contain path separators: {}",
            template
        ));
    }

    for name in clipseq_av::template::placeholders(template) {
        if !TEMPLATE_VARIABLES.contains(&name) {
            return Err(format!(
                "filename_template uses unknown placeholder {{{}}} (known: {})",
                name,
                TEMPLATE_VARIABLES.join(", ")
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.folder_path, PathBuf::new());
        assert_eq!(config.large_file_marker, 0);
        assert_eq!(config.filename_template, DEFAULT_FILENAME_TEMPLATE);
        assert_eq!(config.numbering.policy, NumberingPolicy::Dense);
        assert!(!config.numbering.shift_zero_based);
    }

    #[test]
    fn test_parse_json_original_layout() {
        let json = r#"{
            "folder_path": "/clips",
            "large_file_marker": 300,
            "filename_template": "{date}_{number}"
        }"#;
        let config = parse_config(json, true).unwrap();
        assert_eq!(config.folder_path, PathBuf::from("/clips"));
        assert_eq!(config.large_file_marker, 300);
        assert_eq!(config.filename_template, "{date}_{number}");
    }

    #[test]
    fn test_parse_toml_with_sections() {
        let toml = r#"
folder_path = "/clips"
large_file_marker = -5

[numbering]
policy = "preserve"
shift_zero_based = true

[probe]
backend = "ffprobe"
"#;
        let config = parse_config(toml, false).unwrap();
        assert_eq!(config.large_file_marker, -5);
        assert_eq!(config.filename_template, DEFAULT_FILENAME_TEMPLATE);
        assert_eq!(config.numbering.policy, NumberingPolicy::Preserve);
        assert!(config.numbering.shift_zero_based);
        assert_eq!(config.probe.backend, clipseq_av::ProbeBackend::Ffprobe);
    }

    #[test]
    fn test_parse_empty_is_default() {
        let config = parse_config("", false).unwrap();
        assert_eq!(config.filename_template, DEFAULT_FILENAME_TEMPLATE);

        let config = parse_config("{}", true).unwrap();
        assert_eq!(config.large_file_marker, 0);
    }

    #[test]
    fn test_parse_malformed() {
        assert!(parse_config("folder_path = ", false).is_err());
        assert!(parse_config("{\"large_file_marker\": \"big\"}", true).is_err());
    }

    #[test]
    fn test_validate_template() {
        assert!(validate_template(DEFAULT_FILENAME_TEMPLATE).is_ok());
        assert!(validate_template("clip-{number}").is_ok());
        assert!(validate_template("").is_err());
        assert!(validate_template("   ").is_err());
        assert!(validate_template("sub/{number}").is_err());
        assert!(validate_template("{number}_{title}").is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Dense".parse::<NumberingPolicy>(), Ok(NumberingPolicy::Dense));
        assert_eq!(
            "preserve".parse::<NumberingPolicy>(),
            Ok(NumberingPolicy::Preserve)
        );
        assert!("random".parse::<NumberingPolicy>().is_err());
    }
}
