use serde::{Deserialize, Serialize};

use super::tables::LengthTier;

/// Parameters a document was generated with, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub game_type: String,
    pub game_type_name: String,
    pub theme: String,
    pub theme_name: String,
    pub length: LengthTier,
    pub word_count: u32,
    pub platform: String,
    pub style: String,
    /// Generation time as `YYYYmmdd_HHMMSS`, shared with the artifact names.
    pub generated_at: String,
    pub chapters: usize,
    pub npcs: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptContent {
    pub markdown: String,
    pub title: String,
}

/// The structured export written next to a Markdown document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRecord {
    pub metadata: ScriptMetadata,
    pub content: ScriptContent,
}

/// A finished document: its title, full Markdown body, and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedScript {
    pub title: String,
    pub markdown: String,
    pub metadata: ScriptMetadata,
}

impl GeneratedScript {
    pub fn record(&self) -> ScriptRecord {
        ScriptRecord {
            metadata: self.metadata.clone(),
            content: ScriptContent {
                markdown: self.markdown.clone(),
                title: self.title.clone(),
            },
        }
    }

    /// File stem shared by the document and its record:
    /// `<game_type>_<theme>_<timestamp>`.
    pub fn artifact_stem(&self) -> String {
        format!(
            "{}_{}_{}",
            self.metadata.game_type, self.metadata.theme, self.metadata.generated_at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedScript {
        GeneratedScript {
            title: "Cursed Night".to_string(),
            markdown: "# Cursed Night - Game Design Document\n".to_string(),
            metadata: ScriptMetadata {
                game_type: "horror".to_string(),
                game_type_name: "Horror Game".to_string(),
                theme: "supernatural".to_string(),
                theme_name: "Supernatural".to_string(),
                length: LengthTier::Short,
                word_count: 5000,
                platform: "PC".to_string(),
                style: "epic".to_string(),
                generated_at: "20260101_120000".to_string(),
                chapters: 2,
                npcs: 3,
                seed: None,
            },
        }
    }

    #[test]
    fn artifact_stem_format() {
        assert_eq!(sample().artifact_stem(), "horror_supernatural_20260101_120000");
    }

    #[test]
    fn record_json_shape() {
        let value = serde_json::to_value(sample().record()).unwrap();
        assert_eq!(value["metadata"]["game_type"], "horror");
        assert_eq!(value["metadata"]["length"], "short");
        assert_eq!(value["metadata"]["chapters"], 2);
        assert_eq!(value["metadata"]["npcs"], 3);
        assert!(value["metadata"].get("seed").is_none());
        assert_eq!(value["content"]["title"], "Cursed Night");
        assert!(value["content"]["markdown"]
            .as_str()
            .unwrap()
            .starts_with("# Cursed Night"));
    }

    #[test]
    fn seed_serialized_when_present() {
        let mut script = sample();
        script.metadata.seed = Some(7);
        let value = serde_json::to_value(script.record()).unwrap();
        assert_eq!(value["metadata"]["seed"], 7);
    }
}
