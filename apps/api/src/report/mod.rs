// Downloadable plain-text report built from section responses the client already holds.

pub mod assembler;
pub mod handlers;
