//! # Layout Module
//!
//! Geometric post-processing over a loaded model. The operations here are
//! deliberately conservative: they translate whole molecules as rigid
//! bodies and never move atoms relative to each other within a molecule.

pub mod packer;

pub use packer::Packer;
