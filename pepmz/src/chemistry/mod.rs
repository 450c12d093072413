//! Elements, molecular formulas, and the handling of charge states

mod charge;
mod constants;
mod element;
#[macro_use]
mod formula;

pub use charge::*;
pub use constants::*;
pub use element::*;
pub use formula::*;
