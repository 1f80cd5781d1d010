//! CLI subcommand modules.
//!
//! This module contains the implementations for all intrinsic CLI subcommands.

pub(crate) mod grid;
pub(crate) mod manual;
pub(crate) mod reverse;
pub(crate) mod value;
