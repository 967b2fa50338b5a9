//! Parse the latitude and longitude columns of a population CSV into
//! `ndarray` arrays, and time how long it takes.

pub mod data;
pub mod timing;
