mod bucket;
mod event;
mod event_builder;
mod grid_service;

pub use bucket::*;
pub use event::*;
pub use event_builder::*;
pub use grid_service::*;
