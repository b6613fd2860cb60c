pub mod app;
pub mod data;
pub mod envio;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::EncuestaApp;
