//! Tag field configuration
//!
//! A [`TagConfig`] is captured once when a field is attached to its host and
//! never changes afterwards. It is usually read from the host's string-keyed
//! dataset (see [`TagConfig::from_dataset`]); the demo binary can also load
//! the same keys from `~/.config/tagfield/config.yaml`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// String-keyed configuration carried by a host element
pub type Dataset = BTreeMap<String, String>;

/// Text rewrite applied to draft text before it is split into tags
pub type TransformFn = fn(&str) -> String;

/// Dataset keys understood by [`TagConfig::from_dataset`]
pub mod keys {
    pub const SEPARATOR: &str = "separator";
    pub const VARIANT: &str = "variant";
    pub const X_POSITION: &str = "x-position";
    pub const TRANSFORM: &str = "transform";
    pub const VALIDATE: &str = "validate";
    pub const VALIDATE_MODIFIERS: &str = "validate-modifiers";
    pub const DUPLICATE: &str = "duplicate";
    pub const RAINBOW: &str = "rainbow";
    pub const MAX: &str = "max";
    pub const NO_INPUT_ONBLUR: &str = "no-input-onblur";
    pub const COLOR_SEED: &str = "color-seed";
}

pub const DEFAULT_SEPARATOR: &str = ",";
pub const DEFAULT_VARIANT: &str = "secondary";
pub const DEFAULT_VALIDATE_MODIFIERS: &str = "i";

fn identity(text: &str) -> String {
    text.to_string()
}

/// Named transforms that configuration may refer to.
///
/// Configuration only ever names a transform; the function itself is
/// registered by the embedding application.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, TransformFn>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        let mut registry = Self {
            transforms: HashMap::new(),
        };
        registry.register("identity", identity);
        registry.register("lowercase", |text| text.to_lowercase());
        registry.register("uppercase", |text| text.to_uppercase());
        registry.register("trim", |text| text.trim().to_string());
        registry
    }
}

impl TransformRegistry {
    pub fn register(&mut self, name: &str, transform: TransformFn) {
        self.transforms.insert(name.to_string(), transform);
    }

    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.transforms.get(name).copied()
    }
}

/// Which side of the chip label the close affordance sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipPlacement {
    /// Close affordance before the label (`x-position=left`)
    Leading,
    /// Close affordance after the label (`x-position=right`)
    #[default]
    Trailing,
}

impl ChipPlacement {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "left" => Ok(ChipPlacement::Leading),
            "right" => Ok(ChipPlacement::Trailing),
            other => bail!("Invalid x-position '{}': expected 'left' or 'right'", other),
        }
    }
}

/// Compiled validation pattern. No pattern admits every token.
#[derive(Clone, Default)]
pub struct Validator {
    pattern: Option<Regex>,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .finish()
    }
}

impl Validator {
    /// Compile `pattern` with JavaScript-style `flags` (`i`, `m`, `s`, `u`, `g`, `y`).
    ///
    /// `g`, `y` and `u` have no effect on a whole-token test and are accepted
    /// as-is. An empty pattern disables validation.
    pub fn new(pattern: &str, flags: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = RegexBuilder::new(pattern);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'u' | 'g' | 'y' => {}
                other => bail!("Unsupported validation flag '{}' in '{}'", other, flags),
            }
        }

        let regex = builder
            .build()
            .with_context(|| format!("Invalid validation pattern '{}'", pattern))?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    pub fn is_valid(&self, token: &str) -> bool {
        match &self.pattern {
            Some(regex) => regex.is_match(token),
            None => true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }
}

/// Immutable configuration snapshot for one tag field
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// Delimiter between tags in the host value
    pub separator: String,
    /// Visual variant name for chips (e.g. "secondary", "primary")
    pub variant: String,
    /// Close affordance placement
    pub placement: ChipPlacement,
    /// Rewrite applied to trimmed draft text before splitting
    pub transform: TransformFn,
    /// Admission test for candidate tokens
    pub validator: Validator,
    /// Allow the same token more than once
    pub duplicates_allowed: bool,
    /// Give each tag a palette background
    pub rainbow: bool,
    /// Upper bound on the tag count (None = unbounded)
    pub max_tags: Option<usize>,
    /// Clear the draft on blur instead of committing it
    pub no_input_on_blur: bool,
    /// Seed for rainbow color picks (None = OS entropy)
    pub color_seed: Option<u64>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            variant: DEFAULT_VARIANT.to_string(),
            placement: ChipPlacement::Trailing,
            transform: identity,
            validator: Validator::default(),
            duplicates_allowed: false,
            rainbow: false,
            max_tags: None,
            no_input_on_blur: false,
            color_seed: None,
        }
    }
}

impl TagConfig {
    /// Build a configuration from a host dataset.
    ///
    /// Presence flags (`duplicate`, `rainbow`, `no-input-onblur`) are enabled
    /// by the key being present, whatever its value. Empty string entries
    /// fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Fails on an unknown `x-position`, an unregistered
    /// transform, an invalid pattern or flag, or a `max` that is not a
    /// positive integer.
    pub fn from_dataset(dataset: &Dataset, transforms: &TransformRegistry) -> Result<Self> {
        let mut config = Self::default();

        if let Some(separator) = dataset.get(keys::SEPARATOR).filter(|v| !v.is_empty()) {
            config.separator = separator.clone();
        }

        if let Some(variant) = dataset.get(keys::VARIANT).filter(|v| !v.is_empty()) {
            config.variant = variant.clone();
        }

        if let Some(position) = dataset.get(keys::X_POSITION).filter(|v| !v.is_empty()) {
            config.placement = ChipPlacement::parse(position)?;
        }

        if let Some(name) = dataset.get(keys::TRANSFORM).filter(|v| !v.is_empty()) {
            config.transform = transforms
                .get(name)
                .ok_or_else(|| anyhow!("Unknown transform '{}'", name))?;
        }

        let pattern = dataset.get(keys::VALIDATE).map(String::as_str).unwrap_or("");
        let flags = dataset
            .get(keys::VALIDATE_MODIFIERS)
            .map(String::as_str)
            .unwrap_or(DEFAULT_VALIDATE_MODIFIERS);
        config.validator = Validator::new(pattern, flags)?;

        config.duplicates_allowed = dataset.contains_key(keys::DUPLICATE);
        config.rainbow = dataset.contains_key(keys::RAINBOW);
        config.no_input_on_blur = dataset.contains_key(keys::NO_INPUT_ONBLUR);

        if let Some(max) = dataset.get(keys::MAX).filter(|v| !v.trim().is_empty()) {
            config.max_tags = Some(parse_max(max)?);
        }

        if let Some(seed) = dataset.get(keys::COLOR_SEED).filter(|v| !v.is_empty()) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid color seed '{}'", seed))?;
            config.color_seed = Some(seed);
        }

        Ok(config)
    }

    /// Replace the validator, compiling `pattern` with `flags`
    ///
    /// # Errors
    ///
    /// Fails if the pattern or a flag is invalid.
    pub fn with_validation(mut self, pattern: &str, flags: &str) -> Result<Self> {
        self.validator = Validator::new(pattern, flags)?;
        Ok(self)
    }
}

fn parse_max(raw: &str) -> Result<usize> {
    let max = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid max '{}': expected a positive integer", raw))?;
    if max == 0 {
        bail!("Invalid max '{}': expected a positive integer", raw);
    }
    Ok(max)
}

/// On-disk form of the dataset keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TagConfigFile {
    pub separator: Option<String>,
    pub variant: Option<String>,
    pub x_position: Option<String>,
    pub transform: Option<String>,
    pub validate: Option<String>,
    pub validate_modifiers: Option<String>,
    pub duplicate: bool,
    pub rainbow: bool,
    pub max: Option<usize>,
    pub no_input_onblur: bool,
    pub color_seed: Option<u64>,
}

impl TagConfigFile {
    /// Parse from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse tag field config")
    }

    /// Read and parse a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Load `~/.config/tagfield/config.yaml`, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Flatten into dataset entries, the form a host element carries
    pub fn into_dataset(self) -> Dataset {
        let mut dataset = Dataset::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                dataset.insert(key.to_string(), value);
            }
        };
        put(keys::SEPARATOR, self.separator);
        put(keys::VARIANT, self.variant);
        put(keys::X_POSITION, self.x_position);
        put(keys::TRANSFORM, self.transform);
        put(keys::VALIDATE, self.validate);
        put(keys::VALIDATE_MODIFIERS, self.validate_modifiers);
        put(keys::DUPLICATE, self.duplicate.then(String::new));
        put(keys::RAINBOW, self.rainbow.then(String::new));
        put(keys::MAX, self.max.map(|max| max.to_string()));
        put(keys::NO_INPUT_ONBLUR, self.no_input_onblur.then(String::new));
        put(keys::COLOR_SEED, self.color_seed.map(|seed| seed.to_string()));
        dataset
    }
}
