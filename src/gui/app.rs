use super::{Config, FpsLimiter};
use crate::{CellGrid, ConfigError, GeometryBuffer, FLOATS_PER_VERTEX};
use eframe::egui::{
    epaint::Mesh, Button, CentralPanel, Color32, Context, Frame, Key, Margin, Pos2, Sense, Shape,
    Ui, Vec2,
};

pub struct App {
    grid: CellGrid,            // Simulation state.
    geometry: GeometryBuffer,  // Vertex stream, rebuilt after every advance.
    is_paused: bool,           // Owned here; the grid knows nothing about input.
    do_one_step: bool,         // Advance once while paused.
    generation: u64,           // Current generation number.
    fps_limiter: FpsLimiter,
}

impl App {
    pub fn new() -> Result<Self, ConfigError> {
        let (w, h) = (Config::GRID_WIDTH, Config::GRID_HEIGHT);
        log::info!("starting with a random {}x{} field", w, h);
        Ok(Self {
            grid: CellGrid::random(w, h, None)?,
            geometry: GeometryBuffer::new(w, h)?,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
        })
    }

    fn randomize(&mut self) {
        log::info!("re-randomizing the field");
        // dimensions are unchanged, so this cannot fail
        if let Ok(grid) = CellGrid::random(self.grid.width(), self.grid.height(), None) {
            self.grid = grid;
            self.generation = 0;
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::N) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::R) {
                self.randomize();
            }
        });
    }

    fn update_sim(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.grid.step();
        self.generation += 1;
        self.do_one_step = false;
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.button(text).clicked() {
                self.is_paused = !self.is_paused;
            }
            if ui.add_enabled(self.is_paused, Button::new("Next step")).clicked() {
                self.do_one_step = true;
            }
            if ui.button("Randomize").clicked() {
                self.randomize();
            }
            ui.label(format!(
                "Generation: {}    FPS: {:3}",
                self.generation,
                self.fps_limiter.fps().round() as u32
            ));
        });
    }

    /// Paints the vertex stream. The stream is already a triangle list in
    /// normalized device coordinates; this maps it into the panel square
    /// (y up in NDC, down on screen) and hands it to egui as a mesh.
    fn draw_field(&mut self, ui: &mut Ui) {
        let side = ui.available_size().min_elem();
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;

        let vertices = self.geometry.rebuild(&self.grid);
        let mut mesh = Mesh::default();
        for v in vertices.chunks_exact(FLOATS_PER_VERTEX) {
            let pos = Pos2::new(
                rect.left() + (v[0] + 1.) * 0.5 * rect.width(),
                rect.bottom() - (v[1] + 1.) * 0.5 * rect.height(),
            );
            let color = Color32::from_rgb(
                (v[2] * 255.) as u8,
                (v[3] * 255.) as u8,
                (v[4] * 255.) as u8,
            );
            mesh.colored_vertex(pos, color);
        }
        mesh.indices.extend(0..mesh.vertices.len() as u32);
        painter.add(Shape::mesh(mesh));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(Frame::default().inner_margin(Margin::same(Config::FRAME_MARGIN)))
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);
                self.update_sim();

                self.draw_controls(ui);
                self.draw_field(ui);
            });

        self.fps_limiter.delay();
    }
}
