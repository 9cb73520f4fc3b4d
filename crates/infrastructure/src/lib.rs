//! Extension Manager Infrastructure Layer
pub mod repositories;
pub mod seed;
