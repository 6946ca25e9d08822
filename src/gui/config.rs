pub struct Config;

impl Config {
    pub const GRID_WIDTH: usize = 128;
    pub const GRID_HEIGHT: usize = 128;

    pub const MAX_FPS: f64 = 30.;
    pub const FRAME_MARGIN: f32 = 8.;
}
