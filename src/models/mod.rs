// Core data models for featmatrix
// Raw dataset records plus the resolved display records derived from them

pub mod stage;
pub mod feature;
pub mod cell;

pub use stage::*;
pub use feature::*;
pub use cell::*;
