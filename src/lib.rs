pub mod alphabet;
pub mod api;
pub mod cipher;
pub mod config;
pub mod error;
pub mod frequency;
pub mod keylength;
pub mod recover;
// cmd and reports are binary modules, declared in main.rs.
