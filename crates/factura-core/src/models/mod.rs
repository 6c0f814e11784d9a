//! Data models for the application

mod invoice;

pub use invoice::*;
