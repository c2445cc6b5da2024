pub mod computer;
pub mod loader;
