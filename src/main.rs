use std::time::Duration;

use anyhow::Result;
use glam::Vec3;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

mod core;
mod engine;
mod game;

use engine::game_loop::{FrameSteps, GameLoop};
use engine::input::{Action, InputManager};
use engine::physics::{CapsuleShape, CollisionWorld};
use game::locomotion::{AnimatorParameters, CameraBasis, LocomotionConfig, LocomotionInput};
use game::player::Player;

/// Camera orbit rate while Q/E is held (radians/second)
const ORBIT_SPEED: f32 = 2.0;

/// Fixed camera pitch of the demo orbit camera (radians, looking down)
const CAMERA_PITCH: f32 = 0.35;

/// Ground plane plus a raised platform to jump onto
fn build_scene() -> CollisionWorld {
    let mut world = CollisionWorld::new();
    world.add_level_box(Vec3::ZERO, 0.0, [50.0, 0.5, 50.0]);
    world.add_level_box(Vec3::new(0.0, 0.0, 8.0), 0.8, [2.0, 0.4, 2.0]);
    info!("Scene built with {} colliders", world.collider_count());
    world
}

fn spawn_player(world: &mut CollisionWorld, camera_yaw: f32) -> Result<Player> {
    let player = Player::spawn(
        world,
        Vec3::new(0.0, 1.0, 0.0),
        CapsuleShape::default(),
        LocomotionConfig::default(),
        Some(CameraBasis::from_yaw_pitch(camera_yaw, CAMERA_PITCH)),
        Some(AnimatorParameters::new()),
    )?;
    Ok(player)
}

/// Run one frame's worth of callbacks: fixed ticks first, then the visual update
fn run_frame(
    player: &mut Player,
    world: &mut CollisionWorld,
    steps: FrameSteps,
    input: &LocomotionInput,
) {
    for _ in 0..steps.fixed_steps {
        player.fixed_step(world, steps.fixed_dt);
    }

    if steps.variable_dt > 0.0 {
        player.variable_step(world, steps.variable_dt, input);
    }
}

fn status_line(player: &Player, world: &CollisionWorld, game_loop: &GameLoop) -> String {
    let position = player.position(world);
    let controller = player.controller();
    format!(
        "Stride - {:?} ({:.1}, {:.1}, {:.1}) vy {:.2} - {:.0} FPS{}",
        controller.ground_state(),
        position.x,
        position.y,
        position.z,
        controller.velocity().y,
        game_loop.fps(),
        if game_loop.is_paused() { " [PAUSED]" } else { "" }
    )
}

/// Scripted run with a fixed frame time: walk, sprint, jump onto the platform
fn run_headless() -> Result<()> {
    info!("Running headless demo");

    let mut world = build_scene();
    let mut player = spawn_player(&mut world, 0.0)?;
    let mut game_loop = GameLoop::new();
    let frame_time = Duration::from_micros(16_667);

    let script: [(&str, usize, LocomotionInput); 5] = [
        ("settle", 60, LocomotionInput::default()),
        ("walk", 30, LocomotionInput::new(0.0, 1.0)),
        ("sprint", 15, LocomotionInput::new(0.0, 1.0).sprinting()),
        ("jump", 1, LocomotionInput::new(0.0, 1.0).sprinting().jumping()),
        ("coast", 90, LocomotionInput::new(0.0, 0.3)),
    ];

    for (phase, frames, input) in script {
        for _ in 0..frames {
            let steps = game_loop.advance(frame_time);
            run_frame(&mut player, &mut world, steps, &input);
        }
        info!("{phase:>6}: {}", status_line(&player, &world, &game_loop));
    }

    if let Some(animator) = player.controller().animator() {
        info!(
            "Animator received {} parameter writes over {} frames",
            animator.write_count(),
            game_loop.frame_count()
        );
    }

    Ok(())
}

fn run_windowed() -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let window = WindowBuilder::new()
        .with_title("Stride")
        .with_inner_size(winit::dpi::LogicalSize::new(960, 540))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");
    info!("Controls: WASD/arrows move, Shift sprint, Space jump, Q/E orbit camera, P pause");

    let mut world = build_scene();
    let mut camera_yaw = 0.0f32;
    let mut player = spawn_player(&mut world, camera_yaw)?;
    let mut input = InputManager::with_default_bindings();
    let mut game_loop = GameLoop::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.player_mut().reset();
            }
            Event::AboutToWait => {
                if input.player().just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let steps = game_loop.begin_frame();
                input.player_mut().smooth_axes(steps.variable_dt);

                let orbit = match (
                    input.player().is_pressed(Action::OrbitLeft),
                    input.player().is_pressed(Action::OrbitRight),
                ) {
                    (true, false) => -1.0,
                    (false, true) => 1.0,
                    _ => 0.0,
                };
                if orbit != 0.0 && steps.variable_dt > 0.0 {
                    camera_yaw += orbit * ORBIT_SPEED * steps.variable_dt;
                    player
                        .controller_mut()
                        .set_camera(Some(CameraBasis::from_yaw_pitch(camera_yaw, CAMERA_PITCH)));
                }

                let snapshot = input.player().locomotion_input();
                run_frame(&mut player, &mut world, steps, &snapshot);
                input.update();

                if game_loop.frame_count() % 10 == 0 {
                    update_title(&window, &player, &world, &game_loop);
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

fn update_title(window: &Window, player: &Player, world: &CollisionWorld, game_loop: &GameLoop) {
    window.set_title(&status_line(player, world, game_loop));
}

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Stride...");

    if std::env::args().skip(1).any(|arg| arg == "--headless") {
        run_headless()
    } else {
        run_windowed()
    }
}
