//! Command-line argument parsing for the demo binary
//!
//! Every option maps onto a host dataset key, layered over the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{keys, Dataset, TagConfigFile};

/// Interactive tag field on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "tagfield", version, about = "Edit a delimited list of tags")]
pub struct CliArgs {
    /// Initial host value (e.g. "red,green")
    #[arg(long, default_value = "")]
    pub value: String,

    /// Placeholder shown while there are no tags
    #[arg(long, default_value = "Add a tag...")]
    pub placeholder: String,

    /// Tag separator
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Maximum number of tags
    #[arg(long, value_name = "N")]
    pub max: Option<String>,

    /// Allow duplicate tags
    #[arg(long)]
    pub duplicate: bool,

    /// Give each tag a palette color
    #[arg(long)]
    pub rainbow: bool,

    /// Discard the draft on blur instead of committing it
    #[arg(long)]
    pub no_input_onblur: bool,

    /// Validation pattern tags must match
    #[arg(long, value_name = "REGEX")]
    pub validate: Option<String>,

    /// Validation flags (default "i")
    #[arg(long, value_name = "FLAGS")]
    pub validate_modifiers: Option<String>,

    /// Named draft transform (identity, lowercase, uppercase, trim)
    #[arg(long, value_name = "NAME")]
    pub transform: Option<String>,

    /// Close affordance side: left or right
    #[arg(long, value_name = "SIDE")]
    pub x_position: Option<String>,

    /// Console log level when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: String,

    /// Seed for rainbow colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (defaults to ~/.config/tagfield/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the view as JSON after each line
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Layer the command-line options over the config file's entries
    pub fn into_dataset(&self, file: TagConfigFile) -> Dataset {
        let mut dataset = file.into_dataset();
        let mut set = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                dataset.insert(key.to_string(), value);
            }
        };
        set(keys::SEPARATOR, self.separator.clone());
        set(keys::MAX, self.max.clone());
        set(keys::VALIDATE, self.validate.clone());
        set(keys::VALIDATE_MODIFIERS, self.validate_modifiers.clone());
        set(keys::TRANSFORM, self.transform.clone());
        set(keys::X_POSITION, self.x_position.clone());
        set(keys::DUPLICATE, self.duplicate.then(String::new));
        set(keys::RAINBOW, self.rainbow.then(String::new));
        set(keys::NO_INPUT_ONBLUR, self.no_input_onblur.then(String::new));
        set(keys::COLOR_SEED, self.seed.map(|seed| seed.to_string()));
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let args = CliArgs::parse_from(["tagfield", "--separator", ";", "--rainbow", "--max", "3"]);
        let file = TagConfigFile {
            separator: Some("|".into()),
            duplicate: true,
            ..TagConfigFile::default()
        };
        assert_eq!(args.log_level, "warn");
        let dataset = args.into_dataset(file);
        assert_eq!(dataset.get("separator").map(String::as_str), Some(";"));
        assert_eq!(dataset.get("max").map(String::as_str), Some("3"));
        assert!(dataset.contains_key("rainbow"));
        assert!(dataset.contains_key("duplicate"));
        assert!(!dataset.contains_key("no-input-onblur"));
    }
}
