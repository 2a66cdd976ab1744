//! wire4d - Tesseract Wireframe
//!
//! Spins a cube or a tesseract through its rotation planes and draws the
//! perspective-projected edges, one frame per event-loop tick.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use wire4d::config::AppConfig;
use wire4d::input::{InputAction, InputMapper};
use wire4d::shape_loader::shape_for;
use wire4d::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};
use wire4d_core::{AngleState, ShapeKind, Wireframe};
use wire4d_input::{AngleChange, AngleController};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: AnimationSystem,
    controller: AngleController,
    angles: AngleState,
    shape_kind: ShapeKind,
    shape: Box<dyn Wireframe>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let shape_kind = config.shape.kind;
        let shape = shape_for(&config.shape, shape_kind);
        let angles = config.animation.initial_angles();
        let animation = AnimationSystem::new(config.animation.to_animator());

        Self {
            config,
            window: None,
            render: None,
            animation,
            controller: AngleController::new(),
            angles,
            shape_kind,
            shape,
        }
    }

    fn switch_shape(&mut self) {
        self.shape_kind = self.shape_kind.toggled();
        self.shape = shape_for(&self.config.shape, self.shape_kind);
        self.controller.clamp_selection(self.shape.planes());
    }

    fn handle_angle_change(&self, change: AngleChange) {
        match change {
            AngleChange::Selected(plane) => log::info!("Selected plane {}", plane),
            AngleChange::Angle(plane, degrees) => log::debug!("{} = {}°", plane, degrees),
            AngleChange::Animate(plane, on) => {
                log::info!("Animation of {}: {}", plane, if on { "ON" } else { "OFF" })
            }
            AngleChange::Running(on) => {
                log::info!("Animation {}", if on { "running" } else { "paused" })
            }
            AngleChange::Reset => log::info!("Angles reset"),
        }

        if change.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.animation.tick(&mut self.angles);

        if let Some(render) = &mut self.render {
            match render.render_frame(self.shape.as_ref(), &self.angles) {
                Ok(_) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.update_title(self.shape.name(), self.shape.planes(), &self.angles);
            // Keep polling even while paused
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.colors.style(),
            self.config.projection.to_projector(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };

                // Application keys act once per press; angle keys follow key repeat
                let action = if event.repeat {
                    None
                } else {
                    InputMapper::map_keyboard(key, event.state)
                };
                if let Some(action) = action {
                    match action {
                        InputAction::Exit => event_loop.exit(),
                        InputAction::ToggleFullscreen => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        InputAction::SwitchShape => self.switch_shape(),
                    }
                    return;
                }

                let change = self.controller.process_keyboard(
                    key,
                    event.state,
                    self.shape.planes(),
                    &mut self.angles,
                );
                if let Some(change) = change {
                    self.handle_angle_change(change);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting wire4d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
