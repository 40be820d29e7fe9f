//! Platform abstraction layer
//!
//! Only the browser front-end exists; both it and the headless engine share
//! `engine::ArcadeWorld` for body integration.

pub mod web;

pub use web::WebEngine;
