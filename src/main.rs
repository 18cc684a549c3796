//! Grundriss-Editor (Headless-Treiber).
//!
//! Liest ein Eingabe-Skript (Datei oder stdin), spielt jedes Event über den
//! Controller ab und baut danach einen Frame, wie es ein Renderer täte.

use anyhow::Context;
use floor_plan_editor::app::script;
use floor_plan_editor::{AppController, AppState, EditorOptions, PlanMode, RenderScene};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard)
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!("Grundriss-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);

        let input = Self::read_script(std::env::args().nth(1))?;

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        for (index, line) in input.lines().enumerate() {
            let intent = match script::parse_line(line) {
                Ok(Some(intent)) => intent,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Zeile {} übersprungen: {:#}", index + 1, e);
                    continue;
                }
            };

            controller.handle_intent(&mut state, intent)?;

            let scene = controller.build_render_scene(&state);
            log::info!("Zeile {}: {}", index + 1, frame_summary(&scene));
            log::debug!("Status: {}", state.editor.plan_builder.status_text());

            if state.should_exit {
                log::info!("Beenden angefordert");
                break;
            }
        }

        print_scene(&controller.build_render_scene(&state));
        Ok(())
    }

    fn read_script(path: Option<String>) -> anyhow::Result<String> {
        match path {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Skript konnte nicht gelesen werden: {path}")),
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("stdin konnte nicht gelesen werden")?;
                Ok(content)
            }
        }
    }
}

fn frame_summary(scene: &RenderScene) -> String {
    format!(
        "{:?}/{:?}, {} Punkte, {} Wände, Vorschau: {}, 3D-Körper: {}",
        scene.mode,
        scene.phase,
        scene.point_markers.len(),
        scene.walls.len(),
        scene
            .preview
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.label.text.clone()),
        scene.volumes.len(),
    )
}

fn print_scene(scene: &RenderScene) {
    println!("Phase: {:?}, Modus: {:?}", scene.phase, scene.mode);
    for (wall, label) in scene.walls.iter().zip(&scene.labels) {
        println!("Wand {} → {}  [{}]", wall.from, wall.to, label.text);
    }
    if let Some(fill) = &scene.room_fill {
        println!("Raumfläche: {} Eckpunkte", fill.len());
    }
    if scene.mode == PlanMode::View3D {
        for volume in &scene.volumes {
            println!(
                "Körper: Mitte {}, Länge {:.1}, Drehung {:.3} rad, Höhe {:.0}",
                volume.world_center(),
                volume.length,
                volume.yaw(),
                volume.height
            );
        }
    }
}
