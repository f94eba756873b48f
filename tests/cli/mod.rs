mod config;
mod open;
mod translate;
