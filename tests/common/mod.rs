#![allow(dead_code)]

pub mod fixtures;
pub mod ring_logger;

pub use fixtures::Workspace;
