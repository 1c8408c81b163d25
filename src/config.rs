/// Site configuration
///
/// Display-only facts about the property. The values are read once at
/// startup and handed to the view untouched; none of them influence the
/// gallery or the lightbox.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "DUPLEX_SHOWCASE_CONFIG";

/// Directory name used under the platform config/data dirs
const APP_DIR: &str = "duplex-showcase";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Display name shown in the header and footer
    pub brand: String,
    /// Contact number, shown and copied but never linked
    pub whatsapp_number: String,
    pub address_short: String,
    pub capacity: String,
    pub beds: String,
    pub baths: String,
    pub wifi: String,
    /// Opaque map URL, shown as-is in the location block
    pub map_embed_url: String,
    /// Directory holding the gallery image files
    pub photo_root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Apartamento Dúplex en Filandia".to_string(),
            whatsapp_number: "+57 311 764 4679".to_string(),
            address_short: "Filandia, Quindío – Colombia".to_string(),
            capacity: "6 huéspedes".to_string(),
            beds: "2 camas".to_string(),
            baths: "2 baños".to_string(),
            wifi: "100 Mbps".to_string(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3978.720785802847!2d-75.6585!3d4.6745!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8e388e5a2e9a4fef%3A0x16dcf5d8c6d8a3b6!2sFilandia%2C%20Quind%C3%ADo!5e0!3m2!1ses!2sco!4v1700000000000".to_string(),
            photo_root: default_photo_root(),
        }
    }
}

impl SiteConfig {
    /// Resolve the configuration for this run.
    ///
    /// Lookup order:
    /// - the file named by `DUPLEX_SHOWCASE_CONFIG`
    /// - `<config dir>/duplex-showcase/site.json` when present
    /// - built-in defaults
    ///
    /// A file that exists but cannot be read or parsed is logged and
    /// replaced by the defaults.
    pub fn load() -> Self {
        let path = match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Some(PathBuf::from(path)),
            None => default_config_path().filter(|path| path.exists()),
        };

        let Some(path) = path else {
            tracing::info!("No site config file found, using built-in defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded site config");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to built-in site config");
                Self::default()
            }
        }
    }

    /// Read and parse a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from a JSON string; missing fields keep their defaults
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a photo source such as `/g1.jpg` against the photo root
    pub fn photo_path(&self, source: &str) -> PathBuf {
        self.photo_root.join(source.trim_start_matches('/'))
    }
}

/// `<config dir>/duplex-showcase/site.json`
fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push("site.json");
    Some(path)
}

/// `<data dir>/duplex-showcase/photos`, or `./photos` when there is no data dir
fn default_photo_root() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push(APP_DIR);
            path.push("photos");
            path
        }
        None => PathBuf::from("photos"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Casa Azul", "whatsappNumber": "+57 300 000 0000" }"#)
            .unwrap();

        assert_eq!(config.brand, "Casa Azul");
        assert_eq!(config.whatsapp_number, "+57 300 000 0000");
        assert_eq!(config.beds, SiteConfig::default().beds);
        assert_eq!(config.map_embed_url, SiteConfig::default().map_embed_url);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SiteConfig::from_json("{ brand: ").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/site.json");
        let err = SiteConfig::from_file(path).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("site.json"));
    }

    #[test]
    fn test_photo_path_strips_leading_slash() {
        let config = SiteConfig {
            photo_root: PathBuf::from("/srv/photos"),
            ..SiteConfig::default()
        };

        assert_eq!(config.photo_path("/g1.jpg"), PathBuf::from("/srv/photos/g1.jpg"));
        assert_eq!(config.photo_path("g2.jpg"), PathBuf::from("/srv/photos/g2.jpg"));
    }
}
