use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the config file looked up in the extension directory
pub const CONFIG_FILE: &str = "extpack.toml";

pub const DEFAULT_ARCHIVE: &str = "tinify-extension.zip";

pub const DEFAULT_REQUIRED: &[&str] = &[
    "manifest.json",
    "index.html",
    "style.css",
    "script.js",
    "background.js",
    "jszip.min.js",
];

pub const DEFAULT_OPTIONAL: &[&str] = &["README.md"];

pub const DEFAULT_ASSETS: &[&str] = &["icons"];

/// Raw `extpack.toml` contents; every key may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    #[serde(default)]
    pub archive: Option<String>,

    #[serde(default)]
    pub required: Option<Vec<String>>,

    #[serde(default)]
    pub optional: Option<Vec<String>>,

    #[serde(default)]
    pub assets: Option<Vec<String>>,
}

/// Packaging layout with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub archive: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub assets: Vec<String>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::from(ConfigToml::default())
    }
}

impl From<ConfigToml> for PackConfig {
    fn from(raw: ConfigToml) -> Self {
        Self {
            archive: raw.archive.unwrap_or_else(|| DEFAULT_ARCHIVE.to_string()),
            required: raw.required.unwrap_or_else(|| owned(DEFAULT_REQUIRED)),
            optional: raw.optional.unwrap_or_else(|| owned(DEFAULT_OPTIONAL)),
            assets: raw.assets.unwrap_or_else(|| owned(DEFAULT_ASSETS)),
        }
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl PackConfig {
    /// Load the packaging config.
    ///
    /// An explicit path must exist. Without one, `extpack.toml` in the
    /// extension directory is used when present and the defaults otherwise.
    pub fn load(ctx: &Context, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                let p = ctx.resolve(p);
                if !p.is_file() {
                    return Err(Error::ConfigNotFound(p.display().to_string()));
                }
                p
            }
            None => {
                let p = ctx.base_dir.join(CONFIG_FILE);
                if !p.is_file() {
                    return Ok(Self::default());
                }
                p
            }
        };

        Self::parse(&fs::read_to_string(&path)?)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: ConfigToml = toml::from_str(content)?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PackConfig::default();
        assert_eq!(cfg.archive, "tinify-extension.zip");
        assert_eq!(cfg.required.len(), 6);
        assert_eq!(cfg.required[0], "manifest.json");
        assert_eq!(cfg.required[5], "jszip.min.js");
        assert_eq!(cfg.optional, vec!["README.md".to_string()]);
        assert_eq!(cfg.assets, vec!["icons".to_string()]);
    }

    #[test]
    fn test_partial_override() {
        let cfg = PackConfig::parse(
            r#"
            archive = "my-ext.zip"
            assets = ["icons", "images"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.archive, "my-ext.zip");
        assert_eq!(cfg.assets, vec!["icons".to_string(), "images".to_string()]);
        assert_eq!(cfg.required, PackConfig::default().required);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            PackConfig::parse("archive = [1, 2"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            PackConfig::parse("unknown = true"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(Some(dir.path()), false).unwrap();

        assert_eq!(PackConfig::load(&ctx, None).unwrap(), PackConfig::default());

        fs::write(dir.path().join(CONFIG_FILE), "required = [\"main.js\"]\n").unwrap();
        let cfg = PackConfig::load(&ctx, None).unwrap();
        assert_eq!(cfg.required, vec!["main.js".to_string()]);
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(Some(dir.path()), false).unwrap();

        let err = PackConfig::load(&ctx, Some(Path::new("other.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }
}
