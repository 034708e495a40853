use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Result, anyhow, bail};
use directories::ProjectDirs;
use humantext::{
    DEFAULT_DATE_FORMAT, DEFAULT_DIVIDER, DEFAULT_KEYBOARD_MARGIN_DP, Language, Locale,
    PluralTable,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const PROJECT_QUALIFIER: &'static str = "org";
const PROJECT_ORGANIZATION: &'static str = "humantext";
const PROJECT_APP: &'static str = "humantext";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub defaults: Option<ConfigFileDefaults>,
    /// Word form overrides per language
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plurals: BTreeMap<Language, PluralTable>,
}

impl ConfigFile {
    /// A file with every default spelled out, used by `config init`.
    pub fn populated() -> Self {
        Self {
            defaults: Some(ConfigFileDefaults {
                language: Some(Language::default()),
                divider: Some(String::from(DEFAULT_DIVIDER)),
                date_format: Some(String::from(DEFAULT_DATE_FORMAT)),
                keyboard_margin_dp: Some(DEFAULT_KEYBOARD_MARGIN_DP),
            }),
            plurals: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFileDefaults {
    pub language: Option<Language>,
    pub divider: Option<String>,
    pub date_format: Option<String>,
    pub keyboard_margin_dp: Option<f32>,
}

pub struct LocalConfig {
    config_file: ConfigFile,
    config_file_path: PathBuf,
}

impl LocalConfig {
    /// Loads the config file at `path`, or at the per-user location when `path` is
    /// `None`. A missing file yields the defaults.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config_file_path = match path {
            Some(path) => path,
            None => Self::get_config_dir_path()?.join("config.toml"),
        };

        let config_file = if config_file_path.exists() {
            if !config_file_path.is_file() {
                bail!("invalid config file: {}", config_file_path.display());
            }
            let config_file_text = fs::read_to_string(&config_file_path)?;
            let config_file = toml::from_str(&config_file_text)
                .map_err(|e| anyhow!("failed to parse {}: {e}", config_file_path.display()))?;
            info!("loaded config from {}", config_file_path.display());
            config_file
        } else {
            debug!("no config at {}, using defaults", config_file_path.display());
            ConfigFile::default()
        };

        Ok(Self {
            config_file,
            config_file_path,
        })
    }

    fn get_config_dir_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APP)
            .ok_or(anyhow!("failed to get project directories"))?;

        let config_dir_path = project_dirs.config_local_dir();
        if config_dir_path.exists() && !config_dir_path.is_dir() {
            bail!("invalid config directory");
        }

        Ok(config_dir_path.into())
    }

    pub fn get_config_file(&self) -> &ConfigFile {
        &self.config_file
    }

    pub fn get_config_file_path(&self) -> &PathBuf {
        &self.config_file_path
    }

    pub fn replace_config_file(&mut self, config_file: ConfigFile) {
        self.config_file = config_file;
    }

    fn defaults(&self) -> Option<&ConfigFileDefaults> {
        self.config_file.defaults.as_ref()
    }

    pub fn language(&self) -> Language {
        self.defaults()
            .and_then(|defaults| defaults.language)
            .unwrap_or_default()
    }

    pub fn divider(&self) -> &str {
        self.defaults()
            .and_then(|defaults| defaults.divider.as_deref())
            .unwrap_or(DEFAULT_DIVIDER)
    }

    pub fn date_format(&self) -> &str {
        self.defaults()
            .and_then(|defaults| defaults.date_format.as_deref())
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn keyboard_margin_dp(&self) -> f32 {
        self.defaults()
            .and_then(|defaults| defaults.keyboard_margin_dp)
            .unwrap_or(DEFAULT_KEYBOARD_MARGIN_DP)
    }

    /// Built-in locale for `language` (or the configured one) with the configured word
    /// overrides applied.
    pub fn locale(&self, language: Option<Language>) -> Locale {
        let language = language.unwrap_or_else(|| self.language());
        let locale = Locale::for_language(language);
        match self.config_file.plurals.get(&language) {
            Some(overrides) => locale.with_words(overrides),
            None => locale,
        }
    }

    pub fn write_config_file(&self) -> Result<()> {
        if let Some(parent) = self.config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file_text = toml::to_string(&self.config_file)?;
        fs::write(&self.config_file_path, config_file_text)?;
        info!("wrote config to {}", self.config_file_path.display());
        Ok(())
    }
}
