//! Content tables: the categorical and fragment data every document is built from.
//!
//! The built-in tables live in `design_data/tables.ron` and are compiled into
//! the binary. A user-supplied RON file with the same shape can replace them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

const BUILTIN_TABLES: &str = include_str!("../../design_data/tables.ron");

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid tables: {0}")]
    Invalid(String),
}

/// A game type entry: display data plus the synonyms used for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTypeInfo {
    pub key: String,
    pub name: String,
    pub default_theme: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeInfo {
    pub key: String,
    pub name: String,
    pub style: String,
}

/// Target length of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Canonical lowercase name: "short", "medium", "long".
    pub fn key(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Exact, case-insensitive match against the canonical names.
    pub fn from_key(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|tier| tier.key() == input)
    }
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Scale of a document for one length tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthProfile {
    pub word_count: u32,
    pub chapters: usize,
    pub npcs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthTable {
    pub short: LengthProfile,
    pub medium: LengthProfile,
    pub long: LengthProfile,
}

impl LengthTable {
    pub fn profile(&self, tier: LengthTier) -> LengthProfile {
        match tier {
            LengthTier::Short => self.short,
            LengthTier::Medium => self.medium,
            LengthTier::Long => self.long,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamePool {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

impl NamePool {
    pub fn names(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitlePool {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

/// One major NPC slot in the characters section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcRole {
    pub role: String,
    /// Short label shown in the relationship map, e.g. "supporter".
    pub descriptor: String,
    pub personality: String,
    pub gender: Gender,
}

/// A string-keyed table with a fallback entry for keys it does not list.
///
/// Entries need not implement `Default`; an omitted `by_key` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Keyed<T> {
    pub default: T,
    #[serde(default)]
    pub by_key: HashMap<String, T>,
}

impl<T> Keyed<T> {
    pub fn get(&self, key: &str) -> &T {
        self.by_key.get(key).unwrap_or(&self.default)
    }

    /// Returns true if `key` has its own entry rather than the fallback.
    pub fn has_own(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }
}

/// All lookup and fragment tables, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTables {
    pub default_game_type: String,
    pub game_types: Vec<GameTypeInfo>,
    pub themes: Vec<ThemeInfo>,
    pub lengths: LengthTable,
    pub character_names: Keyed<NamePool>,
    pub plots: Keyed<Vec<String>>,
    pub titles: Keyed<TitlePool>,
    pub world_lore: Keyed<Vec<String>>,
    pub chapter_names: Vec<String>,
    pub boss_types: Vec<String>,
    pub npc_roles: Vec<NpcRole>,
}

impl ContentTables {
    /// The tables compiled into the binary.
    pub fn builtin() -> Result<ContentTables, TableError> {
        Self::parse_ron(BUILTIN_TABLES)
    }

    /// Load and validate tables from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ContentTables, TableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse and validate tables from a RON string.
    pub fn parse_ron(input: &str) -> Result<ContentTables, TableError> {
        let tables: ContentTables = ron::from_str(input)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check the invariants lookups rely on: the default game type and every
    /// default theme exist, and no pool a section draws from is empty.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.game_types.is_empty() {
            return Err(invalid("no game types defined"));
        }
        if self.themes.is_empty() {
            return Err(invalid("no themes defined"));
        }
        if self.game_type(&self.default_game_type).is_none() {
            return Err(invalid(format!(
                "default game type '{}' is not a defined game type",
                self.default_game_type
            )));
        }
        for game_type in &self.game_types {
            if self.theme(&game_type.default_theme).is_none() {
                return Err(invalid(format!(
                    "game type '{}' has unknown default theme '{}'",
                    game_type.key, game_type.default_theme
                )));
            }
        }

        for tier in LengthTier::ALL {
            let profile = self.lengths.profile(tier);
            if profile.chapters == 0 || profile.npcs == 0 || profile.word_count == 0 {
                return Err(invalid(format!("length tier '{}' has a zero size", tier)));
            }
        }

        for (key, pool) in keyed_entries(&self.character_names) {
            if pool.male.is_empty() || pool.female.is_empty() {
                return Err(invalid(format!("name pool '{}' is empty", key)));
            }
        }
        for (key, pool) in keyed_entries(&self.plots) {
            if pool.is_empty() {
                return Err(invalid(format!("plot pool '{}' is empty", key)));
            }
        }
        for (key, pool) in keyed_entries(&self.titles) {
            if pool.prefixes.is_empty() || pool.suffixes.is_empty() {
                return Err(invalid(format!("title pool '{}' is empty", key)));
            }
        }

        if self.chapter_names.is_empty() {
            return Err(invalid("no chapter names defined"));
        }
        if self.boss_types.is_empty() {
            return Err(invalid("no boss types defined"));
        }
        if self.npc_roles.is_empty() {
            return Err(invalid("no NPC roles defined"));
        }

        Ok(())
    }

    pub fn game_type(&self, key: &str) -> Option<&GameTypeInfo> {
        self.game_types.iter().find(|g| g.key == key)
    }

    pub fn theme(&self, key: &str) -> Option<&ThemeInfo> {
        self.themes.iter().find(|t| t.key == key)
    }

    /// The game type unrecognized input falls back to.
    ///
    /// Validation guarantees the configured default exists.
    pub fn default_game_type(&self) -> &GameTypeInfo {
        self.game_type(&self.default_game_type)
            .unwrap_or(&self.game_types[0])
    }

    /// The theme a game type falls back to for unrecognized theme input.
    pub fn default_theme_for(&self, game_type: &GameTypeInfo) -> &ThemeInfo {
        self.theme(&game_type.default_theme)
            .unwrap_or(&self.themes[0])
    }

    pub fn length_profile(&self, tier: LengthTier) -> LengthProfile {
        self.lengths.profile(tier)
    }
}

fn invalid(message: impl Into<String>) -> TableError {
    TableError::Invalid(message.into())
}

/// Iterate a keyed table's fallback entry (named "default") and its own entries.
fn keyed_entries<'a, T>(table: &'a Keyed<T>) -> impl Iterator<Item = (&'a str, &'a T)> {
    std::iter::once(("default", &table.default))
        .chain(table.by_key.iter().map(|(k, v)| (k.as_str(), v)))
}
