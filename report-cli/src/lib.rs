pub mod app;
pub mod config;
pub mod csv_loader;
pub mod day_list;
pub mod logging;
