//! Zeilenbasiertes Eingabe-Skript für den Headless-Treiber.
//!
//! Ein Event pro Zeile, `#` leitet Kommentare ein:
//! `click X Y`, `move X Y`, `leave`, `reset`, `mode 2d|3d`, `toggle`,
//! `tool draw|delete`, `delete AX AY BX BY`, `exit`.

use super::{AppIntent, EditorTool};
use crate::core::WallSegment;
use crate::shared::PlanMode;
use anyhow::{anyhow, bail, Context};
use glam::Vec2;

/// Parst eine Skriptzeile. Leere Zeilen und Kommentare ergeben `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<AppIntent>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let intent = match keyword.as_str() {
        "click" => AppIntent::PointerClicked {
            world_pos: parse_point(&args, 0)?,
        },
        "move" => AppIntent::PointerMoved {
            world_pos: parse_point(&args, 0)?,
        },
        "leave" => AppIntent::PointerLeft,
        "reset" => AppIntent::ResetRequested,
        "toggle" => AppIntent::TogglePlanModeRequested,
        "exit" => AppIntent::ExitRequested,
        "mode" => AppIntent::SetPlanModeRequested {
            mode: match single_arg(&args)?.to_ascii_lowercase().as_str() {
                "2d" => PlanMode::Draw2D,
                "3d" => PlanMode::View3D,
                other => bail!("Unbekannter Modus '{other}' (erwartet 2d|3d)"),
            },
        },
        "tool" => AppIntent::SetEditorToolRequested {
            tool: match single_arg(&args)?.to_ascii_lowercase().as_str() {
                "draw" => EditorTool::Draw,
                "delete" => EditorTool::DeleteWall,
                other => bail!("Unbekanntes Werkzeug '{other}' (erwartet draw|delete)"),
            },
        },
        "delete" => {
            if args.len() != 4 {
                bail!("delete erwartet 4 Zahlen, erhalten: {}", args.len());
            }
            AppIntent::DeleteWallRequested {
                segment: WallSegment::new(parse_point(&args, 0)?, parse_point(&args, 2)?),
            }
        }
        other => bail!("Unbekannter Befehl '{other}'"),
    };

    Ok(Some(intent))
}

fn single_arg<'a>(args: &[&'a str]) -> anyhow::Result<&'a str> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(anyhow!("genau ein Argument erwartet, erhalten: {}", args.len())),
    }
}

fn parse_point(args: &[&str], offset: usize) -> anyhow::Result<Vec2> {
    let coord = |i: usize| -> anyhow::Result<f32> {
        let raw = args
            .get(offset + i)
            .ok_or_else(|| anyhow!("Koordinate {} fehlt", offset + i + 1))?;
        raw.parse::<f32>()
            .with_context(|| format!("Ungültige Koordinate '{raw}'"))
    };
    Ok(Vec2::new(coord(0)?, coord(1)?))
}
