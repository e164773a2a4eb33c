// main.rs — demo host: a winit window driving the control core
//
// Keys: F fisheye, T tiny planet, E equirectangular, M switch between drag
// and hover-look, R reset controls. Camera state is shown in the window title.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use panorama_controls::{
    input, Clock, ControlConfig, Controller, Controls, ProjectionMode, Projections, Scene,
    Scheduler, SystemClock,
};

use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

fn main() {
    env_logger::init();

    let config = match ControlConfig::resolve() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new();
    let window = match WindowBuilder::new()
        .with_title("Panorama Controls")
        .with_inner_size(LogicalSize::new(1280, 720))
        .build(&event_loop)
    {
        Ok(window) => window,
        Err(e) => {
            log::error!("failed to create window: {}", e);
            std::process::exit(1);
        }
    };

    let clock = SystemClock::new();
    let mut scene = Scene::new(config.original_fov, window.inner_size().height);
    // start slightly below the horizon
    scene.rotate(-0.04, 0.0);
    let mut controls = Controls::new();
    let mut projections = Projections::new();
    let mut scheduler: Scheduler<Scene> = Scheduler::new();

    let mut cursor = (0.0f32, 0.0f32);
    let mut last_title = String::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => {
                match &event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }

                    WindowEvent::Resized(new_size) => {
                        scene.height = new_size.height;
                    }

                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = (position.x as f32, position.y as f32);
                    }

                    WindowEvent::KeyboardInput { input, .. }
                        if input.state == ElementState::Pressed =>
                    {
                        let mode = match input.virtual_keycode {
                            Some(VirtualKeyCode::F) => Some(ProjectionMode::Fisheye),
                            Some(VirtualKeyCode::T) => Some(ProjectionMode::TinyPlanet),
                            Some(VirtualKeyCode::E) => Some(ProjectionMode::Equirectangular),
                            Some(VirtualKeyCode::M) => {
                                if controls.pointer.is_enabled() {
                                    controls.pointer.disable();
                                    controls.movement.reset();
                                    controls.movement.enable();
                                } else {
                                    controls.movement.disable();
                                    controls.pointer.reset();
                                    controls.pointer.enable();
                                }
                                log::info!(
                                    "pointer mode: {}",
                                    if controls.movement.is_enabled() { "hover" } else { "drag" }
                                );
                                None
                            }
                            Some(VirtualKeyCode::R) => {
                                controls.reset();
                                projections.cancel(&mut scheduler);
                                None
                            }
                            _ => None,
                        };

                        if let Some(mode) = mode {
                            if !projections.apply(mode, &mut scene, &mut scheduler, &config) {
                                log::warn!("projection {} unavailable", mode.name());
                            }
                        }
                    }

                    _ => {}
                }

                if let Some(input_event) = input::from_window_event(&event, cursor) {
                    controls.handle_event(&input_event, &mut scene, &config, clock.now());
                }
            }

            Event::RedrawRequested(_) => {
                controls.tick(&mut scene, &config, clock.now());
                scheduler.tick(&mut scene);

                if let (Some((yaw, pitch)), Some(camera)) =
                    (scene.yaw_pitch_degrees(), scene.camera.as_ref())
                {
                    let title = format!(
                        "Panorama Controls | {} | FOV: {:.1}° | Yaw: {:.1}° | Pitch: {:.1}°",
                        projections.current().name(),
                        camera.fov,
                        yaw,
                        pitch
                    );
                    if title != last_title {
                        window.set_title(&title);
                        last_title = title;
                    }
                }
            }

            Event::MainEventsCleared => {
                window.request_redraw();
            }

            _ => {}
        }
    });
}
