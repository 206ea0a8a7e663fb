//! bannergen CLI library.
//!
//! Argument-independent pieces of the `bannergen` binary: logging setup and
//! the generate command, kept in a library so they can be tested directly.

pub mod commands;
pub mod logging;
