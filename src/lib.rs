//! topcolors - the three most frequent colors of images listed by URL
//!
//! Reads URLs, downloads and decodes each image concurrently, counts exact
//! 24-bit colors and writes one CSV line per image.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod ranking;
pub mod services;
