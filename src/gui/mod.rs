mod app;
mod config;
mod fps_limit;

pub use app::App;
use config::Config;
use fps_limit::FpsLimiter;
