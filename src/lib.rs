pub mod cli;
pub mod common;
pub mod container;
pub mod demo;
pub mod record;
