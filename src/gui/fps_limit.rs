use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate by sleeping out the remainder of each frame and keeps
/// a smoothed frametime for display.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1. / max_fps,
        }
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    pub fn delay(&mut self) {
        let elapsed = self.frame_timer.elapsed();
        if self.target_frametime > elapsed {
            sleep(self.target_frametime - elapsed);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}
