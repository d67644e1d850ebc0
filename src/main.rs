//! Headless desk-scene demo binary for `deskview`.

use std::path::Path;

use deskview::input::MouseButton;
use deskview::overlay::{HeadlessOverlay, ScreenSync};
use deskview::picking::InteractiveTarget;
use deskview::scene::{MaterialId, ObjectId, SceneObject, Shape, StaticScene};
use deskview::util::clock::{Clock, ManualClock};
use deskview::viewport::Viewport;
use deskview::{InputEvent, Options, ViewerEngine, ViewerError};
use glam::{Mat4, Vec2, Vec3};

type DeskEngine = ViewerEngine<StaticScene, HeadlessOverlay, ManualClock>;

const SCREEN_REST: MaterialId = MaterialId(0);
const SCREEN_HOVER: MaterialId = MaterialId(1);
const DESK: MaterialId = MaterialId(2);

const FRAME_MS: f64 = 1000.0 / 60.0;

struct Desk {
    scene: StaticScene,
    pc: ObjectId,
    mac: ObjectId,
}

fn build_desk() -> Desk {
    let mut scene = StaticScene::new();
    let _ = scene.add_object(SceneObject::new(
        Mat4::from_translation(Vec3::new(0.0, 2.9, 0.0)),
        Shape::Cuboid {
            half_extents: Vec3::new(2.0, 0.1, 0.8),
        },
        DESK,
    ));
    let pc = scene.add_object(SceneObject::new(
        Mat4::from_translation(Vec3::new(-0.7, 3.5, 0.0)),
        Shape::Quad {
            half_extents: Vec2::new(0.6, 0.4),
        },
        SCREEN_REST,
    ));
    let mac = scene.add_object(SceneObject::new(
        Mat4::from_translation(Vec3::new(0.8, 3.4, 0.1))
            * Mat4::from_rotation_y(-0.3),
        Shape::Quad {
            half_extents: Vec2::new(0.5, 0.35),
        },
        SCREEN_REST,
    ));
    Desk { scene, pc, mac }
}

/// Run frames until `until_ms`, logging the live pose at each commit.
fn run_frames(
    engine: &mut DeskEngine,
    clock: &ManualClock,
    until_ms: f64,
) -> Result<(), ViewerError> {
    while clock.now_ms() < until_ms {
        clock.advance(FRAME_MS);
        if let Some(mode) = engine.frame()? {
            let pose = engine.rig().pose()?;
            log::info!(
                "t={:.0}ms committed '{mode}' at {:.2?}",
                clock.now_ms(),
                pose.position
            );
        }
    }
    Ok(())
}

fn pointer_at(engine: &DeskEngine, object: ObjectId) -> Result<Vec2, ViewerError> {
    let camera = engine.rig().camera()?;
    Ok(
        ScreenSync::anchor(camera, engine.scene(), &engine.viewport(), object)
            .unwrap_or(Vec2::ZERO),
    )
}

fn click(engine: &mut DeskEngine, at: Vec2) -> Result<(), ViewerError> {
    engine.handle_input(InputEvent::CursorMoved { x: at.x, y: at.y })?;
    for pressed in [true, false] {
        engine.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        })?;
    }
    Ok(())
}

fn log_overlay(engine: &DeskEngine) {
    let overlay = engine.overlay();
    match overlay.placement.filter(|_| overlay.visible) {
        Some(p) => log::info!(
            "overlay {:.0}x{:.0} at ({:.0}, {:.0}), padding {:.0}",
            p.width,
            p.height,
            p.left,
            p.top,
            p.padding
        ),
        None => log::info!("overlay hidden"),
    }
}

fn main() -> Result<(), ViewerError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let Desk { scene, pc, mac } = build_desk();
    let clock = ManualClock::new();
    let mut engine = ViewerEngine::new(
        options,
        scene,
        HeadlessOverlay::default(),
        clock.clone(),
        vec![
            InteractiveTarget::new(pc, SCREEN_HOVER, SCREEN_REST),
            InteractiveTarget::new(mac, SCREEN_HOVER, SCREEN_REST),
        ],
        Viewport::new(1920.0, 1080.0),
    )?;
    let _ = engine.frame()?;

    // Hover the Mac, then move off everything.
    let mac_at = pointer_at(&engine, mac)?;
    engine.handle_input(InputEvent::CursorMoved {
        x: mac_at.x,
        y: mac_at.y,
    })?;
    log::info!("hovering {:?}", engine.targeting().hovered());
    engine.handle_input(InputEvent::CursorMoved { x: 4.0, y: 4.0 })?;
    log::info!("hovering {:?}", engine.targeting().hovered());

    // Zoom into the PC screen.
    let pc_at = pointer_at(&engine, pc)?;
    click(&mut engine, pc_at)?;
    log::info!("targeting {:?}", engine.targeting().state());
    log_overlay(&engine);
    let duration = engine.options().transition.duration_ms as f64;
    run_frames(&mut engine, &clock, clock.now_ms() + duration + FRAME_MS)?;
    log_overlay(&engine);

    // Shrink the window while zoomed.
    engine.handle_input(InputEvent::Resized {
        width: 800,
        height: 600,
    })?;
    log_overlay(&engine);

    // Close and return to the overview.
    engine.handle_input(InputEvent::KeyPressed {
        key: "Escape".to_owned(),
    })?;
    log_overlay(&engine);
    run_frames(&mut engine, &clock, clock.now_ms() + duration + FRAME_MS)?;

    // Orbit the debug camera a little.
    engine.handle_input(InputEvent::KeyPressed {
        key: "KeyC".to_owned(),
    })?;
    engine.handle_input(InputEvent::CursorMoved { x: 400.0, y: 300.0 })?;
    engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    })?;
    engine.handle_input(InputEvent::CursorMoved { x: 480.0, y: 320.0 })?;
    engine.handle_input(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    })?;
    run_frames(&mut engine, &clock, clock.now_ms() + 500.0)?;
    log::info!(
        "debug camera at {:.2?}",
        engine.rig().pose()?.position
    );
    engine.handle_input(InputEvent::KeyPressed {
        key: "KeyC".to_owned(),
    })?;
    log::info!("camera mode '{}'", engine.rig().active_mode());

    engine.teardown();
    log::info!("walkthrough complete");
    Ok(())
}
