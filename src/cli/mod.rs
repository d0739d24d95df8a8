//! CLI infrastructure for the rote console games
//!
//! This module provides the command-line interface for playing, seeding and
//! inspecting move memories.

pub mod commands;
pub mod output;
