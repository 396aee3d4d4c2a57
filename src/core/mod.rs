//! Pure aggregation and projection core. Nothing in here performs I/O except
//! the path helpers in [`utils`].

pub mod normalizer;
pub mod services;
pub mod simulation;
pub mod utils;
