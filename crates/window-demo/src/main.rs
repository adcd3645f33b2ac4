// File: crates/window-demo/src/main.rs
// Summary: Windowed plotter that blits Skia CPU frames via winit + softbuffer and maps pointer/keyboard input.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use riemann_core::{
    BuiltinFunction, PartitionAnimation, PlotRequest, Plotter, PlotterConfig, PointerEvent, RecordingSurface, RiemannSums, SumKind,
    Vec2,
};
use riemann_render_skia::SkiaRenderer;
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Wheel notches are scaled to the 120-per-notch convention the view controller expects.
const LINE_DELTA: f64 = 120.0;

/// Sums and the fixed overlay only change with the model, not with pan/zoom.
struct FrameCache {
    sums: RiemannSums,
    front: RecordingSurface,
}

struct App {
    plotter: Plotter,
    function: BuiltinFunction,
    renderer: SkiaRenderer,
    cache: Option<FrameCache>,
    animation: Option<PartitionAnimation>,
    cursor: Vec2,
}

impl App {
    fn new(plotter: Plotter, function: BuiltinFunction) -> Self {
        Self { plotter, function, renderer: SkiaRenderer::new(), cache: None, animation: None, cursor: Vec2::default() }
    }

    fn invalidate(&mut self) {
        self.cache = None;
    }

    fn frame(&mut self) -> Result<Vec<u8>> {
        let plotter = &self.plotter;
        let size = plotter.view().size();
        let cache = self.cache.get_or_insert_with(|| {
            let sums = plotter.sums();
            let mut front = RecordingSurface::new(size);
            plotter.draw_front(&mut front, &sums.estimate);
            FrameCache { sums, front }
        });
        let (rgba, _, _, _) = self.renderer.draw_rgba8(size, |s| {
            plotter.draw_back(s, &cache.sums);
            cache.front.replay(s);
        })?;
        Ok(rgba)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.plotter.resize(Vec2::new(width.max(1) as f64, height.max(1) as f64));
        self.invalidate();
    }

    /// Returns `true` when the window needs a redraw.
    fn pointer(&mut self, event: PointerEvent) -> bool {
        self.plotter.handle_pointer(event)
    }

    fn key(&mut self, key: VirtualKeyCode) -> bool {
        match key {
            VirtualKeyCode::F => {
                let next = self.function.next();
                let domain = self.plotter.function().domain();
                match PlotRequest::new(next, domain.start, domain.end, self.plotter.partition().len()) {
                    Ok(request) => {
                        self.plotter.apply(&request);
                        self.function = next;
                    }
                    Err(e) => {
                        error!("cannot switch function: {e}");
                        return false;
                    }
                }
            }
            VirtualKeyCode::U => self.plotter.toggle_sums(SumKind::Upper),
            VirtualKeyCode::L => self.plotter.toggle_sums(SumKind::Lower),
            VirtualKeyCode::Equals | VirtualKeyCode::Plus | VirtualKeyCode::NumpadAdd => {
                let n = self.plotter.partition().len();
                self.plotter.set_partition_count(n + 1);
            }
            VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => {
                let n = self.plotter.partition().len();
                if n <= 1 {
                    return false;
                }
                self.plotter.set_partition_count(n - 1);
            }
            VirtualKeyCode::A => {
                self.animation = match self.animation.take() {
                    Some(_) => {
                        info!("animation stopped");
                        None
                    }
                    None => {
                        info!("animation started");
                        Some(PartitionAnimation::new(Instant::now()))
                    }
                };
                return false;
            }
            _ => return false,
        }
        self.invalidate();
        true
    }

    /// Advance the animation; returns `true` when the plotter changed.
    fn tick(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let changed = animation.tick(now, &mut self.plotter);
        if changed {
            self.invalidate();
        }
        changed
    }
}

fn load_config() -> Result<PlotterConfig> {
    match std::env::args().nth(1) {
        Some(path) => PlotterConfig::from_json_file(&path).with_context(|| format!("failed to load config '{path}'")),
        None => Ok(PlotterConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = load_config()?;
    let (width, height) = (config.size.x, config.size.y);
    let request = PlotRequest::new(BuiltinFunction::Sin, -4.0, 4.0, 8)?;
    let mut app = App::new(Plotter::with_request(config, &request), request.function);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Riemann Sums")
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .build(&event_loop)
        .context("failed to build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    app.resize(size.width, size.height);
    info!("keys: F function, U/L upper/lower, +/- partitions, A animate, Esc quit");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = match &app.animation {
            Some(animation) => ControlFlow::WaitUntil(animation.deadline()),
            None => ControlFlow::Wait,
        };
        match event {
            Event::WindowEvent { event, .. } => {
                let redraw = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        false
                    }
                    WindowEvent::Resized(new_size) => {
                        app.resize(new_size.width, new_size.height);
                        true
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        app.cursor = Vec2::new(position.x, position.y);
                        app.pointer(PointerEvent::Move(app.cursor))
                    }
                    WindowEvent::CursorLeft { .. } => app.pointer(PointerEvent::Leave),
                    WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                        ElementState::Pressed => app.pointer(PointerEvent::Down(app.cursor)),
                        ElementState::Released => app.pointer(PointerEvent::Up),
                    },
                    WindowEvent::MouseWheel { delta, .. } => {
                        let delta = match delta {
                            MouseScrollDelta::LineDelta(_, y) => y as f64 * LINE_DELTA,
                            MouseScrollDelta::PixelDelta(p) => p.y,
                        };
                        app.pointer(PointerEvent::Wheel { at: app.cursor, delta })
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => {
                        if key == VirtualKeyCode::Escape {
                            *control_flow = ControlFlow::Exit;
                            false
                        } else {
                            app.key(key)
                        }
                    }
                    _ => false,
                };
                if redraw {
                    window.request_redraw();
                }
            }
            Event::MainEventsCleared => {
                if app.tick(Instant::now()) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e}");
                    return;
                }
                let rgba = match app.frame() {
                    Ok(rgba) => rgba,
                    Err(e) => {
                        error!("render error: {e:#}");
                        return;
                    }
                };
                let mut buffer = match surface.buffer_mut() {
                    Ok(buffer) => buffer,
                    Err(e) => {
                        error!("frame error: {e}");
                        return;
                    }
                };
                // softbuffer wants 0RGB
                for (dst, px) in buffer.iter_mut().zip(rgba.chunks_exact(4)) {
                    *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
                }
                if let Err(e) = buffer.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    })
}
