//! Request normalizer: maps free-form selection input onto canonical table keys.
//!
//! Matching is exact key first, then substring/keyword, then a default.
//! Unrecognized input never fails; it falls back and logs a warning.

use crate::schema::tables::{ContentTables, GameTypeInfo, LengthTier, ThemeInfo};

fn canonical(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve a game type. Falls back to the tables' default game type.
pub fn normalize_game_type<'t>(tables: &'t ContentTables, input: &str) -> &'t GameTypeInfo {
    let wanted = canonical(input);

    if let Some(game_type) = tables.game_type(&wanted) {
        return game_type;
    }

    for game_type in &tables.game_types {
        if let Some(keyword) = game_type
            .keywords
            .iter()
            .find(|kw| !kw.is_empty() && wanted.contains(&kw.to_lowercase()))
        {
            log::debug!(
                "game type '{}' matched '{}' via keyword '{}'",
                input,
                game_type.key,
                keyword
            );
            return game_type;
        }
    }

    let fallback = tables.default_game_type();
    log::warn!(
        "unrecognized game type '{}', falling back to '{}'",
        input,
        fallback.key
    );
    fallback
}

/// Resolve a theme. Falls back to `game_type`'s default theme.
pub fn normalize_theme<'t>(
    tables: &'t ContentTables,
    input: &str,
    game_type: &GameTypeInfo,
) -> &'t ThemeInfo {
    let wanted = canonical(input);

    if let Some(theme) = tables.theme(&wanted) {
        return theme;
    }

    if let Some(theme) = tables
        .themes
        .iter()
        .find(|t| !wanted.is_empty() && wanted.contains(t.key.as_str()))
    {
        log::debug!("theme '{}' matched '{}' by substring", input, theme.key);
        return theme;
    }

    let fallback = tables.default_theme_for(game_type);
    log::warn!(
        "unrecognized theme '{}', falling back to '{}' for game type '{}'",
        input,
        fallback.key,
        game_type.key
    );
    fallback
}

/// Resolve a length tier. Falls back to `medium`.
pub fn normalize_length(input: &str) -> LengthTier {
    LengthTier::from_key(input).unwrap_or_else(|| {
        let fallback = LengthTier::default();
        log::warn!(
            "unrecognized length '{}', falling back to '{}'",
            input,
            fallback
        );
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ContentTables {
        ContentTables::builtin().unwrap()
    }

    #[test]
    fn game_type_idempotent_on_canonical_keys() {
        let tables = tables();
        for game_type in &tables.game_types {
            assert_eq!(normalize_game_type(&tables, &game_type.key).key, game_type.key);
        }
    }

    #[test]
    fn theme_idempotent_on_canonical_keys() {
        let tables = tables();
        let rpg = tables.default_game_type().clone();
        for theme in &tables.themes {
            assert_eq!(normalize_theme(&tables, &theme.key, &rpg).key, theme.key);
        }
    }

    #[test]
    fn length_idempotent_on_canonical_keys() {
        for tier in LengthTier::ALL {
            assert_eq!(normalize_length(tier.key()), tier);
        }
    }

    #[test]
    fn game_type_case_and_whitespace() {
        let tables = tables();
        assert_eq!(normalize_game_type(&tables, "  HORROR ").key, "horror");
    }

    #[test]
    fn game_type_keyword_match() {
        let tables = tables();
        assert_eq!(normalize_game_type(&tables, "VN").key, "visual_novel");
        assert_eq!(normalize_game_type(&tables, "survival_horror").key, "horror");
        assert_eq!(normalize_game_type(&tables, "city tycoon").key, "simulation");
        assert_eq!(normalize_game_type(&tables, "SLG").key, "strategy");
        assert_eq!(normalize_game_type(&tables, "角色扮演").key, "rpg");
    }

    #[test]
    fn every_keyword_resolves_to_its_own_game_type() {
        let tables = tables();
        for game_type in &tables.game_types {
            for keyword in &game_type.keywords {
                assert_eq!(
                    normalize_game_type(&tables, keyword).key,
                    game_type.key,
                    "keyword '{}' is captured by another game type",
                    keyword
                );
            }
        }
    }

    #[test]
    fn short_keywords_do_not_capture_longer_words() {
        let tables = tables();
        assert_eq!(normalize_game_type(&tables, "tactics").key, "strategy");
        assert_eq!(normalize_game_type(&tables, "tactical strategy-ish").key, "strategy");
        assert_eq!(normalize_game_type(&tables, "ACT game").key, "action");
    }

    #[test]
    fn unrecognized_game_type_falls_back_to_rpg() {
        let tables = tables();
        assert_eq!(normalize_game_type(&tables, "pinball").key, "rpg");
        assert_eq!(normalize_game_type(&tables, "").key, "rpg");
    }

    #[test]
    fn theme_substring_match() {
        let tables = tables();
        let rpg = tables.default_game_type().clone();
        assert_eq!(normalize_theme(&tables, "dark fantasy", &rpg).key, "fantasy");
        assert_eq!(normalize_theme(&tables, "Retro-Cyberpunk", &rpg).key, "cyberpunk");
    }

    #[test]
    fn unrecognized_theme_uses_game_type_default() {
        let tables = tables();
        let horror = tables.game_type("horror").unwrap().clone();
        assert_eq!(normalize_theme(&tables, "noir", &horror).key, "supernatural");

        let adventure = tables.game_type("adventure").unwrap().clone();
        assert_eq!(normalize_theme(&tables, "", &adventure).key, "exploration");
    }

    #[test]
    fn unrecognized_length_falls_back_to_medium() {
        assert_eq!(normalize_length("epic"), LengthTier::Medium);
        assert_eq!(normalize_length(""), LengthTier::Medium);
        assert_eq!(normalize_length("Short"), LengthTier::Short);
    }
}
