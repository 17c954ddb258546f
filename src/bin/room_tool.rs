use anyhow::{bail, Result};
use room_editor::cli::{ToolArgs, ToolCommand};
use room_editor::config::EditorConfig;
use room_editor::scene::RoomScene;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "room_editor=info,warn".into());
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    if let Err(err) = run() {
        eprintln!("error: {err:?}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = ToolArgs::parse_from_env()?;
    let config = match &args.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    match (args.command, args.scene.as_deref()) {
        (ToolCommand::List, Some(scene)) => cmd_list(scene),
        (ToolCommand::Validate, Some(scene)) => cmd_validate(scene, &config),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    eprintln!(
        "Room Tool\n\
         \n\
         Usage:\n\
         \x20 room_tool list <scene.json>\n\
         \x20 room_tool validate <scene.json> [--config <editor.json>]\n"
    );
}

fn cmd_list(path: &Path) -> Result<()> {
    let Some(scene) = RoomScene::load(path)? else {
        println!("{}: empty scene", path.display());
        return Ok(());
    };
    println!("{}: {} furniture item(s)", path.display(), scene.furniture.len());
    for desc in &scene.furniture {
        let p = desc.position;
        match desc.confidence {
            Some(confidence) => println!(
                "  #{:<4} {:<16} ({:.2}, {:.2}, {:.2})  confidence {:.2}",
                desc.id, desc.type_tag, p.x, p.y, p.z, confidence
            ),
            None => println!("  #{:<4} {:<16} ({:.2}, {:.2}, {:.2})", desc.id, desc.type_tag, p.x, p.y, p.z),
        }
    }
    Ok(())
}

fn cmd_validate(path: &Path, config: &EditorConfig) -> Result<()> {
    let bounds = config.room.bounds()?;
    let Some(scene) = RoomScene::load(path)? else {
        println!("{}: empty scene, nothing to validate", path.display());
        return Ok(());
    };
    let outside: Vec<_> = scene.out_of_bounds(&bounds).collect();
    if outside.is_empty() {
        println!("{}: all {} item(s) inside the room", path.display(), scene.furniture.len());
        return Ok(());
    }
    for desc in &outside {
        let raw = desc.position();
        let clamped = bounds.clamp(raw);
        println!(
            "  #{} {} at ({:.2}, {:.2}, {:.2}) would clamp to ({:.2}, {:.2}, {:.2})",
            desc.id, desc.type_tag, raw.x, raw.y, raw.z, clamped.x, clamped.y, clamped.z
        );
    }
    bail!("{} of {} item(s) lie outside the room", outside.len(), scene.furniture.len())
}
