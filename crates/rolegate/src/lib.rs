//! # rolegate
//!
//! Role-based permission sets for CRUD-style access control.
//!
//! This crate provides:
//! - [`PermissionMode`]: create, read, update, delete, and the `crud` shorthand
//! - [`PermissionSet`]: per-mode allow and deny role lists, merging, evaluation
//! - [`RolegateConfig`]: permission sets declared in TOML
//! - [`Error::PermissionDenied`]: a sentinel for turning decisions into errors

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod mode;
pub mod permission;
pub mod role;

mod proptests;

pub use config::{PermissionConfig, RolegateConfig};
pub use error::{Error, Result};
pub use mode::PermissionMode;
pub use permission::PermissionSet;
pub use role::{ANYONE, DEFAULT_ROLE, Role};
