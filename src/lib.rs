pub mod config;
pub mod form;
pub mod languages;
pub mod routes;
pub mod state;
pub mod translate;
