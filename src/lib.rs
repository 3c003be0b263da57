#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod notice;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use background::Background;
pub use config::CanvasConfig;
pub use controller::CanvasController;
pub use error::FileError;
pub use renderer::{Renderer, Surface};
pub use scene::Scene;
pub use shape::Shape;
pub use tools::{Gesture, Mode};
