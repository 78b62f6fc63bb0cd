use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::info;

use scenesave_config::NamingConfig;
use scenesave_context::{DirectoryTree, FsStore, SavePlanner};
use scenesave_model::SceneFile;
use scenesave_naming::NamingEngine;

use crate::cli::{Cli, NextArgs, ParseArgs, PlanArgs, TreeArgs};

pub fn run_parse(cli: &Cli, args: &ParseArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let scene = with_fallback_initials(engine.infer(&args.filename));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }
    println!("{}", record_table(&scene));
    Ok(())
}

pub fn run_next(cli: &Cli, args: &NextArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let scene = with_fallback_initials(engine.infer(&args.filename));
    let scene = apply_edits(
        &scene,
        args.discipline.as_deref(),
        args.user.as_deref(),
        args.note.as_deref(),
        args.set_version,
        args.step,
    );
    let filename = engine.render(&scene).context("render next filename")?;
    info!(previous = %args.filename, next = %filename, "computed next filename");
    if args.json {
        let payload = serde_json::json!({ "filename": filename, "record": scene });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{filename}");
    }
    Ok(())
}

pub fn run_plan(cli: &Cli, args: &PlanArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let store = FsStore::new(jobs_root(args.jobs_root.clone(), engine.config()));
    let planner = SavePlanner::new(&engine, &store);

    let (context, scene) = planner.open(&args.filepath);
    let scene = with_fallback_initials(scene);
    let scene = apply_edits(&scene, None, None, None, args.set_version, args.step);
    let original_folder = Path::new(&args.filepath)
        .parent()
        .unwrap_or_else(|| Path::new(""));
    let plan = planner
        .plan(&context, &scene, original_folder)
        .context("plan next save")?;

    if args.json {
        let payload = serde_json::json!({ "plan": plan, "record": scene });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("directory"), Cell::new(plan.directory.display())]);
    table.add_row(vec![Cell::new("filename"), Cell::new(&plan.filename)]);
    table.add_row(vec![
        Cell::new("context"),
        if plan.resolved {
            Cell::new("resolved").fg(Color::Green)
        } else {
            Cell::new("fallback to original folder").fg(Color::Yellow)
        },
    ]);
    println!("{table}");
    Ok(())
}

pub fn run_tree(cli: &Cli, args: &TreeArgs) -> Result<()> {
    let engine = load_engine(cli)?;
    let config = engine.config();
    let store = FsStore::new(jobs_root(args.jobs_root.clone(), config));
    let mut tree = DirectoryTree::new(scenesave_context::Context::job(args.job.clone()));
    tree.refresh(&store).context("walk job directory tree")?;

    let no_filter = Vec::new();
    let scene_ignore = if args.all {
        &no_filter
    } else {
        &config.map.scene_ignore_list
    };
    let shot_ignore = if args.all {
        &no_filter
    } else {
        &config.map.shot_ignore_list
    };

    let mut table = Table::new();
    table.set_header(vec![header_cell("Scene"), header_cell("Shots")]);
    apply_table_style(&mut table);
    for scene in tree.scenes(scene_ignore) {
        let shots = tree
            .shots(scene, shot_ignore)
            .unwrap_or_default()
            .join(", ");
        table.add_row(vec![Cell::new(scene), Cell::new(shots)]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_disciplines(cli: &Cli) -> Result<()> {
    let engine = load_engine(cli)?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Discipline"),
        header_cell("Keyword"),
        header_cell("Folder"),
    ]);
    apply_table_style(&mut table);
    let mut entries = engine.config().disciplines.clone();
    entries.sort_by(|a, b| a.canonical.cmp(&b.canonical));
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.canonical)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.keyword),
            Cell::new(entry.folder.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_engine(cli: &Cli) -> Result<NamingEngine> {
    let config = match &cli.config {
        Some(path) => NamingConfig::from_path(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => NamingConfig::builtin(),
    };
    NamingEngine::new(config).context("build naming engine")
}

/// Field edits and version arithmetic, in the order the front end applies
/// them: reassignments first, then the version change.
fn apply_edits(
    scene: &SceneFile,
    discipline: Option<&str>,
    user: Option<&str>,
    note: Option<&str>,
    set_version: Option<u32>,
    step: i64,
) -> SceneFile {
    let mut scene = scene.clone();
    if let Some(discipline) = discipline {
        scene = scene.with_discipline(discipline);
    }
    if let Some(user) = user {
        scene = scene.with_user(user);
    }
    if let Some(note) = note {
        scene = scene.with_note(Some(note.to_string()));
    }
    match set_version {
        Some(version) => scene.with_version(version),
        None => scene.increment(step),
    }
}

/// Substitute initials derived from the login name when neither extraction
/// nor the config produced any.
fn with_fallback_initials(scene: SceneFile) -> SceneFile {
    if !scene.user.is_empty() {
        return scene;
    }
    match std::env::var("USER").ok().as_deref().and_then(login_initials) {
        Some(initials) => scene.with_user(&initials),
        None => scene,
    }
}

/// First letter of the login plus the first letter of its last
/// hyphen-separated segment (`andres-weber` -> `aw`).
fn login_initials(login: &str) -> Option<String> {
    let first = login.chars().next()?;
    let second = login.rsplit('-').next().and_then(|part| part.chars().next())?;
    if !first.is_alphabetic() || !second.is_alphabetic() {
        return None;
    }
    Some(format!("{first}{second}").to_lowercase())
}

fn jobs_root(explicit: Option<PathBuf>, config: &NamingConfig) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(format!("/{}", config.map.server_root)))
}

fn record_table(scene: &SceneFile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("description"), Cell::new(&scene.description)]);
    table.add_row(vec![
        Cell::new("discipline"),
        Cell::new(&scene.discipline)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("version"),
        Cell::new(format!("{:03}", scene.version)),
    ]);
    table.add_row(vec![Cell::new("user"), Cell::new(&scene.user)]);
    table.add_row(vec![
        Cell::new("note"),
        Cell::new(scene.note.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![Cell::new("extension"), Cell::new(&scene.extension)]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SceneFile {
        SceneFile {
            description: "macys".to_string(),
            discipline: "FX".to_string(),
            version: 6,
            user: "pv".to_string(),
            note: None,
            extension: "mb".to_string(),
        }
    }

    #[test]
    fn test_apply_edits_increments_by_default() {
        let next = apply_edits(&record(), None, None, None, None, 1);
        assert_eq!(next.version, 7);
    }

    #[test]
    fn test_apply_edits_override_wins_over_step() {
        let next = apply_edits(&record(), None, None, None, Some(5), 3);
        assert_eq!(next.version, 5);
    }

    #[test]
    fn test_apply_edits_reassigns_fields() {
        let next = apply_edits(&record(), Some("anim"), Some("JF"), Some("retime"), None, 1);
        assert_eq!(next.discipline, "ANIM");
        assert_eq!(next.user, "jf");
        assert_eq!(next.note.as_deref(), Some("retime"));
    }

    #[test]
    fn test_login_initials() {
        assert_eq!(login_initials("andres-weber").as_deref(), Some("aw"));
        assert_eq!(login_initials("andres").as_deref(), Some("aa"));
        assert_eq!(login_initials("Pia-Verlane").as_deref(), Some("pv"));
        assert_eq!(login_initials("9render").as_deref(), None);
        assert_eq!(login_initials(""), None);
    }
}
