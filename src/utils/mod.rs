//! Internal utility modules

pub mod string;
