//! Classifier implementations backed by model artifacts on disk

pub mod linear;

pub use linear::LinearModel;
