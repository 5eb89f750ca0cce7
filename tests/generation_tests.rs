/// End-to-end generation tests: request through exported artifacts.

use chrono::{NaiveDate, NaiveDateTime};
use game_script_generator::core::generator::ScriptGenerator;
use game_script_generator::core::runner::{run_batch, run_request, RunOptions};
use game_script_generator::schema::record::ScriptRecord;
use game_script_generator::schema::request::{BatchDescriptor, GenerationRequest};
use game_script_generator::schema::tables::{ContentTables, LengthTier};
use std::path::Path;

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(20, 16, 0))
        .unwrap()
}

fn options(dir: &Path, seed: u64) -> RunOptions {
    RunOptions {
        default_output: dir.to_path_buf(),
        export_json: true,
        seed: Some(seed),
        generated_at: Some(fixed_time()),
    }
}

#[test]
fn horror_supernatural_short_end_to_end() {
    let tables = ContentTables::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let request = GenerationRequest {
        game_type: "horror".to_string(),
        theme: "supernatural".to_string(),
        length: "short".to_string(),
        ..GenerationRequest::default()
    };

    let outcome = run_request(&tables, &request, &options(dir.path(), 2026)).unwrap();
    let markdown = std::fs::read_to_string(&outcome.paths.markdown).unwrap();

    assert_eq!(markdown.matches("#### Chapter ").count(), 2);
    assert_eq!(markdown.matches("**NPC-").count(), 3);

    let pool = tables.titles.get("supernatural");
    let title = &outcome.script.title;
    assert!(
        pool.prefixes.iter().any(|p| title.starts_with(p.as_str())),
        "title '{}' should start with a supernatural prefix",
        title
    );
    assert!(
        pool.suffixes.iter().any(|s| title.ends_with(s.as_str())),
        "title '{}' should end with a supernatural suffix",
        title
    );
    assert!(markdown.starts_with(&format!("# {} - Game Design Document", title)));
    assert!(markdown.contains("**Genre:** Horror Game"));
    assert!(markdown.contains("**Era:** Supernatural world"));
    assert!(!markdown.contains("Level 3: Hidden Ruins"));
}

#[test]
fn long_tier_metadata_matches_text_and_record() {
    let tables = ContentTables::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let request = GenerationRequest {
        length: "long".to_string(),
        platform: "PS5".to_string(),
        style: "grim".to_string(),
        ..GenerationRequest::default()
    };

    let outcome = run_request(&tables, &request, &options(dir.path(), 1)).unwrap();
    let json_path = outcome.paths.json.clone().unwrap();
    let record: ScriptRecord =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(record.metadata.length, LengthTier::Long);
    assert_eq!(record.metadata.chapters, 7);
    assert_eq!(record.metadata.npcs, 8);
    assert_eq!(record.metadata.word_count, 20000);
    assert_eq!(record.metadata.platform, "PS5");
    assert_eq!(record.metadata.style, "grim");
    assert_eq!(record.metadata.generated_at, "20261016_201600");

    let text = &record.content.markdown;
    assert_eq!(text.matches("#### Chapter ").count(), 7);
    assert_eq!(text.matches("**NPC-").count(), 8);
    assert!(text.contains("- Main chapters: 7"));
    assert!(text.contains("- Major NPCs: 8"));
    assert_eq!(text, &std::fs::read_to_string(&outcome.paths.markdown).unwrap());
    assert_eq!(record.content.title, outcome.script.title);
}

#[test]
fn fixed_seed_is_byte_for_byte_reproducible() {
    let tables = ContentTables::builtin().unwrap();
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let request = GenerationRequest {
        game_type: "adventure".to_string(),
        theme: "cyberpunk".to_string(),
        length: "long".to_string(),
        ..GenerationRequest::default()
    };

    let a = run_request(&tables, &request, &options(dir_a.path(), 99)).unwrap();
    let b = run_request(&tables, &request, &options(dir_b.path(), 99)).unwrap();

    assert_eq!(
        std::fs::read(&a.paths.markdown).unwrap(),
        std::fs::read(&b.paths.markdown).unwrap()
    );
    assert_eq!(
        std::fs::read(a.paths.json.unwrap()).unwrap(),
        std::fs::read(b.paths.json.unwrap()).unwrap()
    );
}

#[test]
fn unrecognized_input_falls_back_without_error() {
    let tables = ContentTables::builtin().unwrap();
    let mut generator = ScriptGenerator::builder(&tables)
        .game_type("pinball")
        .theme("noir")
        .length("enormous")
        .seed(3)
        .generated_at(fixed_time())
        .build();

    let script = generator.generate().unwrap();
    assert_eq!(script.metadata.game_type, "rpg");
    assert_eq!(script.metadata.theme, "fantasy");
    assert_eq!(script.metadata.length, LengthTier::Medium);
    assert_eq!(script.markdown.matches("#### Chapter ").count(), 4);
}

#[test]
fn batch_fixture_generates_every_item() {
    let tables = ContentTables::builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let batch = BatchDescriptor::load(Path::new("tests/fixtures/batch.json")).unwrap();

    let outcomes = run_batch(&tables, &batch, &options(dir.path(), 10)).unwrap();
    assert_eq!(outcomes.len(), 3);

    let stems: Vec<String> = outcomes
        .iter()
        .map(|o| {
            o.paths
                .markdown
                .file_stem()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(
        stems,
        vec![
            "horror_supernatural_20261016_201600",
            "visual_novel_fantasy_20261016_201600",
            "rpg_fantasy_20261016_201600",
        ]
    );

    let vn = &outcomes[1].script.metadata;
    assert_eq!(vn.platform, "Switch");
    assert_eq!(vn.style, "cozy");
    assert_eq!(vn.npcs, 8);
    assert_eq!(vn.seed, Some(11));
}

#[test]
fn custom_tables_drive_generation() {
    let tables =
        ContentTables::load_from_ron(Path::new("tests/fixtures/minimal_tables.ron")).unwrap();
    let mut generator = ScriptGenerator::builder(&tables)
        .game_type("coin-op classics")
        .theme("anything")
        .length("long")
        .seed(5)
        .generated_at(fixed_time())
        .build();

    assert_eq!(generator.game_type().key, "arcade");
    assert_eq!(generator.theme().key, "retro");

    let script = generator.generate().unwrap();
    assert_eq!(script.title, "Neon Blaster");
    // Three chapters and NPCs requested, two slots of each available.
    assert_eq!(script.markdown.matches("#### Chapter ").count(), 2);
    assert_eq!(script.markdown.matches("**NPC-").count(), 2);
    assert!(script.markdown.contains("**Name:** Pac"));
    assert!(script.markdown.contains("**Name:** Giant Ghost"));
    assert_eq!(script.metadata.npcs, 3);
}
