//! Winit-based Application Shell
//!
//! The shell owns the window, the renderer, and the layout/theme state, and
//! drives everything from winit's event loop on a single thread.
//!
//! # Overview
//!
//! - [`App`]: builder for configuring and launching the window
//! - `AppRunner`: internal event loop handler (not exposed publicly)
//!
//! The window is created borderless and transparent; all visible chrome is
//! drawn by the renderer, and move/resize gestures are handed to the OS
//! based on [`classify`](crate::hit::classify) results.
//!
//! # Redraw model
//!
//! A [`RedrawGate`] debounces self-initiated redraws: every state-changing
//! event invalidates it, and any number of changes between two redraw
//! opportunities collapse into exactly one self-requested render. A delivered
//! `RedrawRequested` always paints, though, so OS expose events repaint the
//! window even when no state changed; and a frame that could not be
//! presented (lost or outdated surface) stays owed and is retried on the
//! next wake. The loop wakes at least every 100 ms to re-query the system
//! theme, since not every platform pushes appearance changes as events;
//! between wakes it sleeps without polling.
//!
//! # Usage
//!
//! ```rust,ignore
//! use casement::App;
//!
//! fn main() -> casement::Result<()> {
//!     App::new().with_title("Demo Window").run()
//! }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::assets::ShadowAssets;
use crate::errors::{CasementError, Result};
use crate::hit::{HitRegion, classify};
use crate::layout::Layout;
use crate::renderer::ChromeRenderer;
use crate::theme::Theme;

/// Default logical window size at startup.
const INITIAL_SIZE: (f64, f64) = (800.0, 600.0);

/// Minimum logical window size; keeps the layout non-degenerate (the shadow
/// corners alone need 110 logical pixels per axis).
const MIN_SIZE: (f64, f64) = (126.0, 126.0);

/// How often the loop wakes to re-query the system theme.
const THEME_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application builder for configuring and launching the demo window.
pub struct App {
    title: String,
}

impl App {
    /// Creates a new application builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Casement".into(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Runs the application. Blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop, window, GPU context, or shadow
    /// assets fail to initialize.
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut runner = AppRunner::new(self.title);
        event_loop.run_app(&mut runner)?;

        match runner.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks whether the last rendered frame is stale.
///
/// The gate decides when the loop must request a redraw itself; it never
/// suppresses a redraw the OS already delivered. A frame that was not
/// presented leaves the gate owed, so surface loss is retried on the next
/// wake instead of silently dropped.
struct RedrawGate {
    owed: bool,
}

impl RedrawGate {
    /// Starts owed: nothing has been presented yet.
    fn new() -> Self {
        Self { owed: true }
    }

    /// Marks the last frame stale. Idempotent between presents.
    fn invalidate(&mut self) {
        self.owed = true;
    }

    /// Whether the loop should request a redraw before sleeping.
    fn owes_redraw(&self) -> bool {
        self.owed
    }

    /// Records a render attempt; an unpresented frame stays owed.
    fn frame_finished(&mut self, presented: bool) {
        self.owed = !presented;
    }
}

/// Internal event loop handler owning all single-instance state.
struct AppRunner {
    title: String,

    window: Option<Arc<Window>>,
    renderer: Option<ChromeRenderer>,
    layout: Option<Layout>,
    theme: Theme,

    gate: RedrawGate,
    /// Last reported cursor position, in logical pixels.
    cursor: Vec2,

    /// First fatal startup error; reported out of [`App::run`].
    fatal: Option<CasementError>,
}

impl AppRunner {
    fn new(title: String) -> Self {
        Self {
            title,
            window: None,
            renderer: None,
            layout: None,
            theme: Theme::default(),
            gate: RedrawGate::new(),
            cursor: Vec2::ZERO,
            fatal: None,
        }
    }

    /// Records a fatal startup error and ends the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: CasementError) {
        log::error!("Fatal startup error: {err}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn mark_dirty(&mut self) {
        self.gate.invalidate();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Recomputes the whole layout from the current pixel size and display
    /// scale, and invalidates the last rendered frame.
    fn update_layout(&mut self) {
        let (Some(window), Some(renderer)) = (&self.window, &self.renderer) else {
            return;
        };
        let size = window.inner_size();
        let scale = window.scale_factor() as f32;
        self.layout = Some(Layout::compute(
            size.width,
            size.height,
            scale,
            renderer.margins(),
        ));
        log::debug!("Layout recomputed: {}x{} @ {scale}", size.width, size.height);
        self.mark_dirty();
    }

    /// Paints a frame. Called for every delivered `RedrawRequested`, whether
    /// it came from [`Self::mark_dirty`] or from the OS exposing the window,
    /// so obscured-then-revealed content is repainted even with no state
    /// change pending.
    fn redraw(&mut self) {
        let (Some(renderer), Some(layout)) = (&mut self.renderer, &self.layout) else {
            return;
        };
        let presented = renderer.render(layout, self.theme.active());
        self.gate.frame_finished(presented);
    }

    /// Re-queries the OS theme; marks dirty only on an actual change.
    fn poll_theme(&mut self) {
        let Some(mode) = self.window.as_ref().and_then(|w| w.theme()) else {
            return;
        };
        if self.theme.set_mode(mode.into()) {
            log::debug!("System theme changed to {:?}", self.theme.mode());
            self.mark_dirty();
        }
    }

    /// Hands a left-button press to the OS as a move or resize gesture.
    fn begin_window_gesture(&self, region: HitRegion) {
        let Some(window) = &self.window else {
            return;
        };
        let result = if region == HitRegion::Draggable {
            window.drag_window()
        } else if let Some(direction) = region.resize_direction() {
            window.drag_resize_window(direction)
        } else {
            return;
        };
        if let Err(e) = result {
            // The platform may not support interactive gestures; the window
            // simply stays where it is.
            log::debug!("Window gesture rejected by the platform: {e}");
        }
    }
}

impl ApplicationHandler for AppRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1))
            .with_min_inner_size(LogicalSize::new(MIN_SIZE.0, MIN_SIZE.1))
            .with_decorations(false)
            .with_transparent(true);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let assets = match ShadowAssets::load() {
            Ok(assets) => assets,
            Err(e) => return self.fail(event_loop, e),
        };

        log::info!("Initializing renderer backend...");
        let renderer = match pollster::block_on(ChromeRenderer::new(window.clone(), &assets)) {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, e),
        };

        if let Some(theme) = window.theme() {
            self.theme.set_mode(theme.into());
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.update_layout();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.update_layout();
            }
            WindowEvent::ScaleFactorChanged { .. } => self.update_layout(),
            WindowEvent::ThemeChanged(theme) => {
                if self.theme.set_mode(theme.into()) {
                    self.mark_dirty();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (Some(window), Some(layout)) = (&self.window, &self.layout) else {
                    return;
                };
                let logical = position.to_logical::<f64>(window.scale_factor());
                self.cursor = Vec2::new(logical.x as f32, logical.y as f32);
                window.set_cursor(classify(self.cursor, layout).cursor_icon());
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(layout) = &self.layout {
                    self.begin_window_gesture(classify(self.cursor, layout));
                }
            }
            _ => {}
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            self.poll_theme();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.gate.owes_redraw()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + THEME_POLL_INTERVAL));
    }
}

// ============================================================================
// Tests
// ============================================================================
