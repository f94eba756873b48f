pub mod open;
pub mod translate;
pub mod window;
