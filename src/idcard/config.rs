//! # Configuration
//!
//! Stored as `config.json` in the data directory. Every key is optional:
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `slot` | `employees` | Name of the persisted slot holding the record list |
//! | `logoGreen` | built-in | Image file used when a card has no right logo |
//! | `logoPurple` | built-in | Image file used when a card has no left logo |
//! | `seedFile` | built-in | JSON array of records used to seed an empty store |
//!
//! The configuration is turned into [`Defaults`] once at startup and passed
//! explicitly to the store and the card renderer. Initialization order is
//! config, then defaults, then backend, then store.

use crate::error::{CardError, Result};
use crate::image::encode_data_uri;
use crate::model::EmployeeRecord;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_SLOT: &str = "employees";

pub const BUILTIN_LOGO_GREEN: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='64' height='64'><circle cx='32' cy='32' r='30' fill='%23179c52'/></svg>";
pub const BUILTIN_LOGO_PURPLE: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='64' height='64'><circle cx='32' cy='32' r='30' fill='%236a3d9a'/></svg>";

static BUILTIN_SEED: Lazy<Vec<EmployeeRecord>> = Lazy::new(|| {
    vec![
        EmployeeRecord {
            ec_no: "EC-1001".into(),
            name: "Rahim Uddin".into(),
            ec_date: "30/Sep/2025".into(),
            birth_date: "1994-03-12".into(),
            passport_no: "A01234567".into(),
            passport_issue_date: "2022-01-10".into(),
            passport_expire_date: "2032-01-09".into(),
            visa_no: "V-558120".into(),
            visa_issue_date: "2025-06-01".into(),
            visa_expire_date: "2027-05-31".into(),
            referral_no: "R-7781".into(),
            recruiting_agency: "Green Line Overseas".into(),
            employer: "Al Noor Construction".into(),
            country: "Saudi Arabia".into(),
            bmet_no: "BM-2025-0191".into(),
            gender: "Male".into(),
            blood_group: "B+".into(),
            nid: "1994123456789".into(),
            passport_name: "RAHIM UDDIN".into(),
            passport_no1: "A01234567".into(),
            ..Default::default()
        },
        EmployeeRecord {
            ec_no: "EC-1002".into(),
            name: "Salma Akter".into(),
            ec_date: "02/Oct/2025".into(),
            birth_date: "1998-11-04".into(),
            passport_no: "B07654321".into(),
            passport_issue_date: "2023-04-18".into(),
            passport_expire_date: "2033-04-17".into(),
            visa_no: "V-601442".into(),
            visa_issue_date: "2025-07-15".into(),
            visa_expire_date: "2027-07-14".into(),
            referral_no: "R-7790".into(),
            recruiting_agency: "Green Line Overseas".into(),
            employer: "Gulf Care Services".into(),
            country: "Qatar".into(),
            bmet_no: "BM-2025-0207".into(),
            gender: "Female".into(),
            blood_group: "O+".into(),
            nid: "1998987654321".into(),
            passport_name: "SALMA AKTER".into(),
            passport_no1: "B07654321".into(),
            ..Default::default()
        },
    ]
});

/// Configuration for idcard, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    #[serde(default = "default_slot")]
    pub slot: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_green: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_purple: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            logo_green: None,
            logo_purple: None,
            seed_file: None,
        }
    }
}

/// Keys accepted by `idcard config <key> [value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Slot,
    LogoGreen,
    LogoPurple,
    SeedFile,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Slot,
        ConfigKey::LogoGreen,
        ConfigKey::LogoPurple,
        ConfigKey::SeedFile,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "slot" => Some(ConfigKey::Slot),
            "logo-green" => Some(ConfigKey::LogoGreen),
            "logo-purple" => Some(ConfigKey::LogoPurple),
            "seed-file" => Some(ConfigKey::SeedFile),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::Slot => "slot",
            ConfigKey::LogoGreen => "logo-green",
            ConfigKey::LogoPurple => "logo-purple",
            ConfigKey::SeedFile => "seed-file",
        }
    }
}

impl CardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            ConfigKey::Slot => self.slot.clone(),
            ConfigKey::LogoGreen => path(&self.logo_green),
            ConfigKey::LogoPurple => path(&self.logo_purple),
            ConfigKey::SeedFile => path(&self.seed_file),
        }
    }

    /// Sets a key. An empty value clears the optional keys.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        let path = || (!value.is_empty()).then(|| PathBuf::from(value));
        match key {
            ConfigKey::Slot => {
                if value.is_empty() {
                    return Err(CardError::Api("Slot name cannot be empty".into()));
                }
                self.slot = value.to_string();
            }
            ConfigKey::LogoGreen => self.logo_green = path(),
            ConfigKey::LogoPurple => self.logo_purple = path(),
            ConfigKey::SeedFile => self.seed_file = path(),
        }
        Ok(())
    }
}

/// Process-wide values resolved from [`CardConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub seed: Vec<EmployeeRecord>,
    pub logo_green: String,
    pub logo_purple: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            seed: BUILTIN_SEED.clone(),
            logo_green: BUILTIN_LOGO_GREEN.to_string(),
            logo_purple: BUILTIN_LOGO_PURPLE.to_string(),
        }
    }
}

impl Defaults {
    /// Resolves configured files. Paths are relative to `base_dir`. Anything
    /// unreadable is logged and replaced by the built-in value.
    pub fn from_config(config: &CardConfig, base_dir: &Path) -> Self {
        let mut defaults = Self::default();

        if let Some(path) = &config.logo_green {
            if let Some(uri) = load_logo(&base_dir.join(path)) {
                defaults.logo_green = uri;
            }
        }
        if let Some(path) = &config.logo_purple {
            if let Some(uri) = load_logo(&base_dir.join(path)) {
                defaults.logo_purple = uri;
            }
        }
        if let Some(path) = &config.seed_file {
            let path = base_dir.join(path);
            match load_seed(&path) {
                Ok(seed) => defaults.seed = seed,
                Err(e) => log::warn!("Ignoring seed file {}: {}", path.display(), e),
            }
        }

        defaults
    }
}

fn load_logo(path: &Path) -> Option<String> {
    let encoded = fs::read(path)
        .map_err(CardError::Io)
        .and_then(|bytes| encode_data_uri(&bytes));
    match encoded {
        Ok(uri) => Some(uri),
        Err(e) => {
            log::warn!("Ignoring logo {}: {}", path.display(), e);
            None
        }
    }
}

fn load_seed(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
