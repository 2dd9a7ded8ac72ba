use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tsumiki_ipc::{ClickRegion, Command};

use crate::bindings::{self, ButtonBinding, Bindings, KeyBinding};
use crate::core::{Rule, Tag, MAX_TAGS};
use crate::layout::Layout;

mod defaults;

pub const MFACT_MIN: f64 = 0.05;
pub const MFACT_MAX: f64 = 0.95;

/// `[fg, bg, border]` colors.
pub type ColorScheme = [String; 3];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schemes {
    pub norm: ColorScheme,
    pub sel: ColorScheme,
    pub occ: ColorScheme,
    pub title: ColorScheme,
}

/// Tag underline drawn by the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Underline {
    pub pad: u32,
    pub stroke: u32,
    pub voffset: u32,
    /// Underline every tag instead of the selected ones only.
    pub all: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub border_px: u32,
    pub gap_px: u32,
    pub snap: u32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub horiz_pad_bar: u32,
    pub vert_pad_bar: u32,
    /// Pixel height of the primary font, as measured by the host.
    pub font_height: u32,
    pub underline: Underline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySpec {
    /// `"ctrl-shift-Return"` style description.
    pub key: String,
    pub command: Command,
}

/// Generates `view`/`tag` bindings for each tag, in tag order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagKeys {
    pub modifier: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSpec {
    pub click: ClickRegion,
    #[serde(default)]
    pub modifiers: String,
    pub button: u32,
    pub command: Command,
}

/// The configuration file as written. Every field is optional and defaults
/// to the shipped configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub tags: Vec<String>,
    pub fonts: Vec<String>,
    pub schemes: Schemes,
    pub appearance: Appearance,
    pub mfact: f64,
    pub nmaster: u32,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub rules: Vec<Rule>,
    pub layouts: Vec<Layout>,
    pub keys: Vec<KeySpec>,
    pub tag_keys: Option<TagKeys>,
    pub buttons: Vec<ButtonSpec>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("between 1 and {MAX_TAGS} tags are required, got {0}")]
    TagCount(usize),
    #[error("{context}: tag mask {mask:#x} exceeds the {count} configured tags")]
    TagMask {
        context: String,
        mask: u32,
        count: usize,
    },
    #[error("at least one layout is required")]
    NoLayouts,
    #[error("{context}: layout {index} does not exist ({count} layouts)")]
    LayoutIndex {
        context: String,
        index: usize,
        count: usize,
    },
    #[error("invalid binding {binding:?}: {message}")]
    Binding { binding: String, message: String },
    #[error("{context}: spawn needs a program")]
    EmptySpawn { context: String },
    #[error("tag_keys lists {keys} keys but only {tags} tags exist")]
    TagKeys { keys: usize, tags: usize },
}

/// Validated, immutable configuration. Colors, fonts and hint flags stay in
/// [`ConfigFile`] for the host to draw with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tags: Vec<String>,
    pub appearance: Appearance,
    pub mfact: f64,
    pub nmaster: u32,
    pub rules: Vec<Rule>,
    pub layouts: Vec<Layout>,
    pub bindings: Bindings,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_file(ConfigFile::default()).expect("built-in configuration is valid")
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tsumiki").join("config.json"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::from_file(ConfigFile::read(path)?)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, or the default location when `None`. A missing file at
    /// the default location yields the built-in configuration.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::info!("No config file found, using built-in configuration");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let tag_count = file.tags.len();
        if tag_count == 0 || tag_count > MAX_TAGS {
            return Err(ConfigError::TagCount(tag_count));
        }
        if file.layouts.is_empty() {
            return Err(ConfigError::NoLayouts);
        }
        let validator = Validator {
            all_tags: Tag::full(tag_count),
            tag_count,
            layout_count: file.layouts.len(),
        };

        for (i, rule) in file.rules.iter().enumerate() {
            validator.check_mask(&format!("rule {}", i), rule.tags)?;
        }

        let mfact = if (MFACT_MIN..=MFACT_MAX).contains(&file.mfact) {
            file.mfact
        } else {
            let clamped = file.mfact.clamp(MFACT_MIN, MFACT_MAX);
            tracing::warn!("mfact {} out of range, using {}", file.mfact, clamped);
            clamped
        };

        let mut keys = Vec::with_capacity(file.keys.len());
        for spec in &file.keys {
            let (modifiers, keysym) =
                bindings::parse_keybind(&spec.key).map_err(|message| ConfigError::Binding {
                    binding: spec.key.clone(),
                    message,
                })?;
            validator.check_command(&spec.key, &spec.command)?;
            keys.push(KeyBinding {
                modifiers,
                keysym,
                command: spec.command.clone(),
            });
        }
        if let Some(tag_keys) = &file.tag_keys {
            keys.extend(expand_tag_keys(tag_keys, tag_count)?);
        }

        let mut buttons = Vec::with_capacity(file.buttons.len());
        for spec in &file.buttons {
            let context = format!("{:?} button{}", spec.click, spec.button);
            let modifiers =
                bindings::parse_modifiers(&spec.modifiers).map_err(|message| {
                    ConfigError::Binding {
                        binding: context.clone(),
                        message,
                    }
                })?;
            validator.check_command(&context, &spec.command)?;
            buttons.push(ButtonBinding {
                region: spec.click,
                modifiers,
                button: spec.button,
                command: spec.command.clone(),
            });
        }

        Ok(Self {
            tags: file.tags,
            appearance: file.appearance,
            mfact,
            nmaster: file.nmaster,
            rules: file.rules,
            layouts: file.layouts,
            bindings: Bindings::new(keys, buttons),
        })
    }

    pub fn all_tags(&self) -> Tag {
        Tag::full(self.tags.len())
    }

    pub fn bar_height(&self) -> u32 {
        self.appearance.font_height + self.appearance.vert_pad_bar
    }
}

struct Validator {
    all_tags: Tag,
    tag_count: usize,
    layout_count: usize,
}

impl Validator {
    fn check_mask(&self, context: &str, mask: u32) -> Result<(), ConfigError> {
        let unconfigured = self.all_tags.complement(Tag::full(MAX_TAGS));
        if Tag::from_mask(mask).intersects(unconfigured) {
            return Err(ConfigError::TagMask {
                context: context.to_string(),
                mask,
                count: self.tag_count,
            });
        }
        Ok(())
    }

    fn check_command(&self, context: &str, command: &Command) -> Result<(), ConfigError> {
        if let Some(mask) = command.tag_mask() {
            self.check_mask(context, mask)?;
        }
        match command {
            Command::SetLayout { layout: Some(index) } if *index >= self.layout_count => {
                Err(ConfigError::LayoutIndex {
                    context: context.to_string(),
                    index: *index,
                    count: self.layout_count,
                })
            }
            Command::Spawn { argv } if argv.first().map_or(true, |p| p.is_empty()) => {
                Err(ConfigError::EmptySpawn {
                    context: context.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn expand_tag_keys(tag_keys: &TagKeys, tag_count: usize) -> Result<Vec<KeyBinding>, ConfigError> {
    if tag_keys.keys.len() > tag_count {
        return Err(ConfigError::TagKeys {
            keys: tag_keys.keys.len(),
            tags: tag_count,
        });
    }
    let modifiers =
        bindings::parse_modifiers(&tag_keys.modifier).map_err(|message| ConfigError::Binding {
            binding: tag_keys.modifier.clone(),
            message,
        })?;
    let shifted = modifiers.with(tsumiki_ipc::modifier::SHIFT);

    let mut keys = Vec::with_capacity(tag_keys.keys.len() * 2);
    for (i, key) in tag_keys.keys.iter().enumerate() {
        let keysym = bindings::normalize_keysym(key).map_err(|message| ConfigError::Binding {
            binding: key.clone(),
            message,
        })?;
        let mask = Tag::nth(i).mask();
        keys.push(KeyBinding {
            modifiers,
            keysym: keysym.clone(),
            command: Command::View { tags: mask },
        });
        keys.push(KeyBinding {
            modifiers: shifted,
            keysym,
            command: Command::Tag { tags: mask },
        });
    }
    Ok(keys)
}
