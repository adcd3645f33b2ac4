// File: crates/riemann-core/src/plotter.rs
// Summary: Plotter ties config, function, partition, sum toggles and view together and composes a redraw.

use crate::config::PlotterConfig;
use crate::function::{BuiltinFunction, PlotFunction};
use crate::geometry::{Interval, Rect, Vec2};
use crate::grid::{draw_axis, draw_grid};
use crate::input::PlotRequest;
use crate::partition::Partition;
use crate::surface::{Paint, RecordingSurface, Surface};
use crate::sums::{compute_sums, draw_sum_labels, draw_sum_rects, RiemannSums, SumEstimate, SumKind, SumToggles};
use crate::transform::Transform;
use crate::view::{PointerEvent, ViewController};

/// The two render targets of one frame.
///
/// `back` holds everything that follows pan/zoom (grid, sums, curve, axis);
/// `front` is the fixed overlay (estimate labels, border). Hosts paint back then front.
#[derive(Clone, Debug)]
pub struct Scene {
    pub back: RecordingSurface,
    pub front: RecordingSurface,
}

impl Scene {
    pub fn compose(&self, target: &mut dyn Surface) {
        self.back.replay(target);
        self.front.replay(target);
    }
}

#[derive(Debug)]
pub struct Plotter {
    config: PlotterConfig,
    function: PlotFunction,
    partition: Partition,
    toggles: SumToggles,
    view: ViewController,
}

impl Plotter {
    /// Plotter showing `sin(x)` over [-4, 4] with 8 sub-intervals.
    pub fn new(config: PlotterConfig) -> Self {
        let request = PlotRequest {
            function: BuiltinFunction::Sin,
            domain: Interval::new(-4.0, 4.0),
            partitions: 8,
        };
        Self::with_request(config, &request)
    }

    pub fn with_request(config: PlotterConfig, request: &PlotRequest) -> Self {
        let function = PlotFunction::builtin(request.function, request.domain, config.delta);
        let partition = Partition::uniform(request.domain, request.partitions);
        let toggles = SumToggles::from_config(&config.sums);
        let view = ViewController::new(&config);
        let mut plotter = Self { config, function, partition, toggles, view };
        plotter.recenter();
        plotter
    }

    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    pub fn function(&self) -> &PlotFunction {
        &self.function
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn toggles(&self) -> SumToggles {
        self.toggles
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn transform(&self) -> Transform {
        self.view.transform()
    }

    /// Replace function and partition, and centre the view on the domain at y = 0.
    pub fn set_function(&mut self, function: PlotFunction, partition: Partition) {
        log::info!(
            "function {} on [{}, {}] with {} sub-intervals",
            function.name(),
            function.domain().start,
            function.domain().end,
            partition.len()
        );
        self.function = function;
        self.partition = partition;
        self.recenter();
    }

    pub fn apply(&mut self, request: &PlotRequest) {
        let function = PlotFunction::builtin(request.function, request.domain, self.config.delta);
        let partition = Partition::uniform(request.domain, request.partitions);
        self.set_function(function, partition);
    }

    /// Re-partition the current domain without moving the view.
    pub fn set_partition_count(&mut self, n: usize) {
        self.partition = Partition::uniform(self.function.domain(), n);
    }

    pub fn set_sums_visible(&mut self, kind: SumKind, shown: bool) {
        self.toggles.set(kind, shown);
    }

    pub fn toggle_sums(&mut self, kind: SumKind) {
        self.toggles.toggle(kind);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.view.handle(event)
    }

    pub fn resize(&mut self, size: Vec2) {
        self.view.resize(size);
    }

    fn recenter(&mut self) {
        self.view.set_anchor(Vec2::new(self.function.domain().midpoint(), 0.0));
    }

    pub fn sums(&self) -> RiemannSums {
        compute_sums(&self.function, &self.partition, self.toggles, &self.config.sums)
    }

    /// Full frame onto a single surface: back layer then front overlay.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let sums = self.sums();
        self.draw_back(surface, &sums);
        self.draw_front(surface, &sums.estimate);
    }

    /// Record both layers separately so a host can cache or transform them independently.
    pub fn scene(&self) -> Scene {
        let size = self.view.size();
        let sums = self.sums();
        let mut back = RecordingSurface::new(size);
        let mut front = RecordingSurface::new(size);
        self.draw_back(&mut back, &sums);
        self.draw_front(&mut front, &sums.estimate);
        Scene { back, front }
    }

    pub fn draw_back(&self, surface: &mut dyn Surface, sums: &RiemannSums) {
        let cfg = &self.config;
        let t = self.transform();
        let size = surface.size();
        surface.clear(Rect::from_size(size), cfg.background);
        if cfg.grid.on {
            for line in &cfg.grid.lines {
                draw_grid(surface, &t, line);
            }
        }
        surface.set_alpha(cfg.sums.opacity);
        draw_sum_rects(surface, &t, sums, &cfg.sums);
        surface.set_alpha(1.0);
        self.draw_graph(surface, &t);
        if cfg.axis.on {
            draw_axis(surface, &t, &cfg.axis);
        }
    }

    pub fn draw_front(&self, surface: &mut dyn Surface, estimate: &SumEstimate) {
        let cfg = &self.config;
        surface.set_alpha(cfg.sums.opacity);
        draw_sum_labels(surface, estimate, &cfg.sums);
        surface.set_alpha(1.0);
        if cfg.border.on {
            let size = surface.size();
            let frame = Rect::from_size(size);
            surface.draw_rect(frame, &Paint::stroke(cfg.border.colour, cfg.border.width));
        }
    }

    fn draw_graph(&self, surface: &mut dyn Surface, t: &Transform) {
        let path: Vec<Vec2> = self
            .function
            .points()
            .iter()
            .map(|&p| t.point_to_screen(Vec2::from(p)))
            .collect();
        if path.len() < 2 {
            return;
        }
        let graph = &self.config.graph;
        surface.draw_path(&path, &Paint::stroke(graph.colour, graph.line_width));
    }
}
