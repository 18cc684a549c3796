use approx::assert_relative_eq;
use floor_plan_editor::{
    extrude, AppCommand, AppController, AppIntent, AppState, EditorOptions, EditorTool, PlanMode,
    PlanPhase, WallSegment,
};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerClicked {
                world_pos: Vec2::new(x, y),
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

fn intent(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Zeichnet das Dreieck (0,0) → (100,0) → (100,100) und schließt bei (5,5).
fn closed_triangle() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (5.0, 5.0)] {
        click(&mut controller, &mut state, x, y);
    }
    (controller, state)
}

#[test]
fn test_triangle_closes_near_first_point() {
    let (_, state) = closed_triangle();

    assert_eq!(state.phase(), PlanPhase::Closed);
    assert_eq!(state.plan().points().len(), 3);
    assert_eq!(
        state.segments.all(),
        &[
            WallSegment::new(Vec2::ZERO, Vec2::new(100.0, 0.0)),
            WallSegment::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)),
            WallSegment::new(Vec2::new(100.0, 100.0), Vec2::ZERO),
        ]
    );
}

#[test]
fn test_clicks_after_closure_map_to_no_command() {
    let (mut controller, mut state) = closed_triangle();
    let logged = state.command_log.len();

    click(&mut controller, &mut state, 300.0, 300.0);

    assert_eq!(state.command_log.len(), logged);
    assert_eq!(state.wall_count(), 3);
    assert_eq!(state.plan().points().len(), 3);
}

#[test]
fn test_clicks_are_snapped_to_grid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 9.0, 11.0);
    click(&mut controller, &mut state, 51.0, -9.0);

    assert_eq!(state.plan().points(), &[Vec2::new(0.0, 20.0), Vec2::new(60.0, 0.0)]);
    assert_eq!(
        state.segments.all(),
        &[WallSegment::new(Vec2::new(0.0, 20.0), Vec2::new(60.0, 0.0))]
    );
}

#[test]
fn test_reset_after_closure_allows_new_room() {
    let (mut controller, mut state) = closed_triangle();

    intent(&mut controller, &mut state, AppIntent::ResetRequested);

    assert_eq!(state.phase(), PlanPhase::Empty);
    assert!(state.segments.is_empty());
    assert!(state.plan().points().is_empty());
    assert!(state.view.cursor_world.is_none());

    click(&mut controller, &mut state, 40.0, 40.0);
    assert_eq!(state.phase(), PlanPhase::Open);
    assert!(state.segments.is_empty());
}

#[test]
fn test_preview_follows_cursor_and_ends_on_leave() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(47.0, 3.0),
        },
    );
    let scene = controller.build_render_scene(&state);
    let preview = scene.preview.expect("Vorschau erwartet");
    assert_eq!(preview.segment, WallSegment::new(Vec2::ZERO, Vec2::new(40.0, 0.0)));
    assert_eq!(preview.label.text, "40 cm");
    assert!(state.segments.is_empty());

    intent(&mut controller, &mut state, AppIntent::PointerLeft);
    assert!(controller.build_render_scene(&state).preview.is_none());
}

#[test]
fn test_3d_mode_extrudes_open_chain_and_2d_discards_volumes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 0.0, 100.0);

    intent(
        &mut controller,
        &mut state,
        AppIntent::SetPlanModeRequested {
            mode: PlanMode::View3D,
        },
    );

    assert_eq!(state.phase(), PlanPhase::Open);
    assert_eq!(state.view.volumes.len(), 1);
    let volume = state.view.volumes[0];
    assert_relative_eq!(volume.length, 100.0);
    assert_relative_eq!(volume.orientation, FRAC_PI_2, epsilon = 1e-6);
    assert_eq!(volume.center, Vec2::new(0.0, 50.0));
    assert_relative_eq!(volume.height, 250.0);

    intent(&mut controller, &mut state, AppIntent::TogglePlanModeRequested);

    assert_eq!(state.view.mode, PlanMode::Draw2D);
    assert!(state.view.volumes.is_empty());
    assert_eq!(state.wall_count(), 1);
    assert_eq!(state.plan().points().len(), 2);
}

#[test]
fn test_clicks_in_3d_mode_are_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    intent(&mut controller, &mut state, AppIntent::TogglePlanModeRequested);
    assert_eq!(state.view.mode, PlanMode::View3D);

    click(&mut controller, &mut state, 0.0, 0.0);

    assert_eq!(state.phase(), PlanPhase::Empty);
}

#[test]
fn test_3d_volumes_match_pure_extrusion() {
    let (mut controller, mut state) = closed_triangle();

    intent(
        &mut controller,
        &mut state,
        AppIntent::SetPlanModeRequested {
            mode: PlanMode::View3D,
        },
    );

    assert_eq!(state.view.volumes, extrude(state.segments.all(), 250.0));
    assert_eq!(
        extrude(state.segments.all(), 250.0),
        extrude(state.segments.all(), 250.0)
    );
}

#[test]
fn test_delete_tool_removes_wall_under_cursor() {
    let (mut controller, mut state) = closed_triangle();

    intent(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::DeleteWall,
        },
    );
    click(&mut controller, &mut state, 104.0, 50.0);

    assert_eq!(state.wall_count(), 2);
    assert_eq!(
        state.segments.all(),
        &[
            WallSegment::new(Vec2::ZERO, Vec2::new(100.0, 0.0)),
            WallSegment::new(Vec2::new(100.0, 100.0), Vec2::ZERO),
        ]
    );

    match state.command_log.entries().last() {
        Some(AppCommand::DeleteWallAt { max_distance, .. }) => {
            assert_relative_eq!(*max_distance, 10.0)
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }

    // Klick fern jeder Wand ändert nichts
    click(&mut controller, &mut state, 300.0, 300.0);
    assert_eq!(state.wall_count(), 2);
}

#[test]
fn test_delete_wall_request_removes_exact_match_only() {
    let (mut controller, mut state) = closed_triangle();

    intent(
        &mut controller,
        &mut state,
        AppIntent::DeleteWallRequested {
            segment: WallSegment::new(Vec2::new(100.0, 100.0), Vec2::new(100.0, 0.0)),
        },
    );
    assert_eq!(state.wall_count(), 3);

    intent(
        &mut controller,
        &mut state,
        AppIntent::DeleteWallRequested {
            segment: WallSegment::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0)),
        },
    );
    assert_eq!(state.wall_count(), 2);
    assert_eq!(state.segments.all()[1].from, Vec2::new(100.0, 100.0));
}

#[test]
fn test_delete_in_3d_mode_refreshes_volumes() {
    let (mut controller, mut state) = closed_triangle();
    intent(&mut controller, &mut state, AppIntent::TogglePlanModeRequested);
    assert_eq!(state.view.volumes.len(), 3);

    intent(
        &mut controller,
        &mut state,
        AppIntent::DeleteWallRequested {
            segment: WallSegment::new(Vec2::ZERO, Vec2::new(100.0, 0.0)),
        },
    );

    assert_eq!(state.view.volumes.len(), 2);
}

#[test]
fn test_options_change_grid_and_wall_height() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EditorOptions {
        grid_size: 50.0,
        wall_height: 300.0,
        ..EditorOptions::default()
    };

    intent(&mut controller, &mut state, AppIntent::OptionsChanged { options });
    click(&mut controller, &mut state, 30.0, 20.0);
    click(&mut controller, &mut state, 130.0, 20.0);
    intent(&mut controller, &mut state, AppIntent::TogglePlanModeRequested);

    assert_eq!(state.plan().points()[0], Vec2::new(50.0, 0.0));
    assert_eq!(state.editor.plan_builder.grid_size(), 50.0);
    assert_relative_eq!(state.view.volumes[0].height, 300.0);
}

#[test]
fn test_half_unit_wall_and_preview_labels_round_up() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EditorOptions {
        grid_size: 2.5,
        ..EditorOptions::default()
    };

    intent(&mut controller, &mut state, AppIntent::OptionsChanged { options });
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 12.5, 0.0);
    intent(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(12.5, 2.5),
        },
    );

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.labels[0].text, "13 cm");
    let preview = scene.preview.expect("Vorschau erwartet");
    assert_eq!(preview.label.text, "3 cm");
}

#[test]
fn test_render_scene_after_closure() {
    let (controller, state) = closed_triangle();

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.phase, PlanPhase::Closed);
    assert_eq!(scene.walls.len(), 3);
    assert_eq!(scene.wall_outlines.len(), 3);
    let texts: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["100 cm", "100 cm", "141 cm"]);
    assert_eq!(scene.room_fill.as_ref().map(Vec::len), Some(3));
    assert!(scene.volumes.is_empty());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    intent(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);

    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
