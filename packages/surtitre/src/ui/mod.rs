mod app;
mod chrome;
mod overlay;
mod trigger;

pub use app::App;
