pub mod app;
pub mod diagram;
pub mod surface;
pub mod theme;
