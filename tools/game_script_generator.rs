/// Game Script Generator — writes complete game design documents.
///
/// Usage:
///   game_script_generator --type horror --theme supernatural --length short --json
///   game_script_generator --batch games.json

use anyhow::{Context, Result};
use clap::Parser;
use game_script_generator::core::runner::{run_batch_file, run_request, RunOptions};
use game_script_generator::schema::request::{
    GenerationRequest, DEFAULT_GAME_TYPE, DEFAULT_LENGTH, DEFAULT_OUTPUT_DIR,
    DEFAULT_PLATFORM, DEFAULT_STYLE, DEFAULT_THEME,
};
use game_script_generator::schema::tables::ContentTables;
use std::path::PathBuf;

/// Game Script Generator - generate complete game design documents
#[derive(Parser, Debug)]
#[command(name = "game_script_generator")]
#[command(about = "Generate complete game design documents from templates", long_about = None)]
#[command(version)]
struct Args {
    /// Game type (rpg, adventure, visual_novel, horror, action, strategy, simulation, puzzle)
    #[arg(short = 't', long = "type", default_value = DEFAULT_GAME_TYPE)]
    game_type: String,

    /// Theme (fantasy, scifi, modern, cyberpunk, supernatural, wuxia, ...)
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,

    /// Document length (short, medium, long)
    #[arg(short, long, default_value = DEFAULT_LENGTH)]
    length: String,

    /// Target platform
    #[arg(short, long, default_value = DEFAULT_PLATFORM)]
    platform: String,

    /// Game style
    #[arg(short, long, default_value = DEFAULT_STYLE)]
    style: String,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Also export a JSON record next to each document
    #[arg(long)]
    json: bool,

    /// Batch descriptor file (JSON, or RON with a .ron extension)
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Replace the built-in content tables with a RON file
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let tables = match &args.tables {
        Some(path) => ContentTables::load_from_ron(path)
            .with_context(|| format!("loading content tables from {}", path.display()))?,
        None => ContentTables::builtin().context("loading built-in content tables")?,
    };

    let options = RunOptions {
        default_output: args.output.clone(),
        export_json: args.json,
        seed: args.seed,
        generated_at: None,
    };

    if let Some(batch_path) = &args.batch {
        let outcomes = run_batch_file(&tables, batch_path, &options)
            .with_context(|| format!("running batch {}", batch_path.display()))?;

        if !args.quiet {
            for outcome in &outcomes {
                print_paths(&outcome.paths.markdown, outcome.paths.json.as_deref());
            }
            println!("\n✓ Batch complete: {} documents", outcomes.len());
        }
        return Ok(());
    }

    let request = GenerationRequest {
        game_type: args.game_type.clone(),
        theme: args.theme.clone(),
        length: args.length.clone(),
        platform: args.platform.clone(),
        style: args.style.clone(),
        output: None,
    };

    let outcome = run_request(&tables, &request, &options)?;

    if !args.quiet {
        let meta = &outcome.script.metadata;
        print_paths(&outcome.paths.markdown, outcome.paths.json.as_deref());
        println!("\n✓ Generation complete!");
        println!("  Title:        {}", outcome.script.title);
        println!("  Game type:    {}", meta.game_type_name);
        println!("  Theme:        {}", meta.theme_name);
        println!("  Target words: about {}", meta.word_count);
        println!("  File:         {}", outcome.paths.markdown.display());
    }

    Ok(())
}

fn print_paths(markdown: &std::path::Path, json: Option<&std::path::Path>) {
    println!("✓ Script written: {}", markdown.display());
    if let Some(json) = json {
        println!("✓ JSON exported: {}", json.display());
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
