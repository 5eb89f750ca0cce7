/// Table Linter — validates a content tables file and reports coverage gaps.
///
/// Usage: table_linter [<tables.ron>]
///
/// With no argument the built-in tables are checked.

use game_script_generator::schema::tables::{ContentTables, LengthTier};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: table_linter [<tables.ron>]");
        process::exit(0);
    }

    let tables = match args.get(1) {
        Some(path) => {
            println!("Checking {}", path);
            ContentTables::load_from_ron(Path::new(path))
        }
        None => {
            println!("Checking built-in tables");
            ContentTables::builtin()
        }
    };

    let tables = match tables {
        Ok(tables) => tables,
        Err(e) => {
            println!("\n=== Table Lint Report ===\n");
            println!("ERROR: {}", e);
            println!("\nSummary: 1 errors, 0 warnings");
            process::exit(1);
        }
    };

    println!(
        "Loaded {} game types, {} themes",
        tables.game_types.len(),
        tables.themes.len()
    );

    let warnings = lint_tables(&tables);

    println!("\n=== Table Lint Report ===\n");

    if warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    println!("\nSummary: 0 errors, {} warnings", warnings.len());
}

/// Coverage checks on tables that already passed validation.
fn lint_tables(tables: &ContentTables) -> Vec<String> {
    let mut warnings = Vec::new();

    for game_type in &tables.game_types {
        if !tables.plots.has_own(&game_type.key) && game_type.key != tables.default_game_type {
            warnings.push(format!(
                "game type '{}' has no plot pool, the default pool will be used",
                game_type.key
            ));
        }
        if game_type.keywords.is_empty() {
            warnings.push(format!(
                "game type '{}' has no keywords, only exact input will match it",
                game_type.key
            ));
        }
    }

    for theme in &tables.themes {
        if !tables.character_names.has_own(&theme.key) {
            warnings.push(format!(
                "theme '{}' has no name pool, the default pool will be used",
                theme.key
            ));
        }
        if !tables.world_lore.has_own(&theme.key) {
            warnings.push(format!("theme '{}' has no world lore", theme.key));
        }
    }

    let mut orphan_plots: Vec<&String> = tables
        .plots
        .by_key
        .keys()
        .filter(|k| tables.game_type(k).is_none())
        .collect();
    orphan_plots.sort();
    for key in orphan_plots {
        warnings.push(format!("plot pool '{}' matches no game type", key));
    }

    let mut orphan_theme_keys: Vec<&String> = tables
        .titles
        .by_key
        .keys()
        .chain(tables.character_names.by_key.keys())
        .chain(tables.world_lore.by_key.keys())
        .filter(|k| tables.theme(k).is_none())
        .collect();
    orphan_theme_keys.sort();
    orphan_theme_keys.dedup();
    for key in orphan_theme_keys {
        warnings.push(format!("theme-keyed entry '{}' matches no theme", key));
    }

    for tier in LengthTier::ALL {
        let profile = tables.length_profile(tier);
        if profile.chapters > tables.chapter_names.len() {
            warnings.push(format!(
                "length '{}' wants {} chapters but only {} chapter names exist",
                tier,
                profile.chapters,
                tables.chapter_names.len()
            ));
        }
        if profile.npcs > tables.npc_roles.len() {
            warnings.push(format!(
                "length '{}' wants {} NPCs but only {} NPC roles exist",
                tier,
                profile.npcs,
                tables.npc_roles.len()
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_shortfall_and_missing_pools_reported() {
        let tables =
            ContentTables::load_from_ron(Path::new("tests/fixtures/minimal_tables.ron")).unwrap();
        let warnings = lint_tables(&tables);

        assert!(warnings.contains(
            &"theme 'retro' has no name pool, the default pool will be used".to_string()
        ));
        assert!(warnings.contains(&"theme 'retro' has no world lore".to_string()));
        assert!(warnings.contains(
            &"length 'long' wants 3 chapters but only 2 chapter names exist".to_string()
        ));
        assert!(warnings.contains(
            &"length 'long' wants 3 NPCs but only 2 NPC roles exist".to_string()
        ));
        assert!(!warnings.iter().any(|w| w.starts_with("length 'medium'")));
        assert!(!warnings.iter().any(|w| w.contains("plot pool")));
    }

    #[test]
    fn game_type_without_plots_or_keywords_reported() {
        let mut tables = ContentTables::builtin().unwrap();
        tables.plots.by_key.remove("horror");
        tables.game_types[3].keywords.clear();

        let warnings = lint_tables(&tables);
        assert!(warnings.contains(
            &"game type 'horror' has no plot pool, the default pool will be used".to_string()
        ));
        assert!(warnings.contains(
            &"game type 'horror' has no keywords, only exact input will match it".to_string()
        ));
    }

    #[test]
    fn orphan_entries_reported_in_key_order() {
        let mut tables = ContentTables::builtin().unwrap();
        for key in ["zeta", "alpha", "mid"] {
            tables.plots.by_key.insert(key.to_string(), vec!["X: y".to_string()]);
            tables.world_lore.by_key.insert(key.to_string(), Vec::new());
        }
        tables
            .titles
            .by_key
            .insert("alpha".to_string(), tables.titles.default.clone());

        let warnings = lint_tables(&tables);
        let plots: Vec<&String> = warnings
            .iter()
            .filter(|w| w.starts_with("plot pool"))
            .collect();
        assert_eq!(
            plots,
            [
                "plot pool 'alpha' matches no game type",
                "plot pool 'mid' matches no game type",
                "plot pool 'zeta' matches no game type",
            ]
        );
        let themed: Vec<&String> = warnings
            .iter()
            .filter(|w| w.starts_with("theme-keyed"))
            .collect();
        assert_eq!(
            themed,
            [
                "theme-keyed entry 'alpha' matches no theme",
                "theme-keyed entry 'mid' matches no theme",
                "theme-keyed entry 'zeta' matches no theme",
            ]
        );
    }
}
