//! Platform-agnostic logic: page geometry, remote data, form state, site content.

pub mod config;
pub mod content;
pub mod form;
pub mod model;
pub mod remote;
pub mod scroll;
