//! # Printer Protocol
//!
//! Command builders for the escape-sequence vocabulary of the Star
//! MC-Print3 running in its line-mode emulation. Only the commands the
//! order ticket embeds are implemented; see [`commands`].

pub mod commands;
