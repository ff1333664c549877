//! Network parameter registry - per-network consensus constants and the
//! process-wide active-profile selector

mod chainparams;
mod network;
mod selector;

pub use chainparams::*;
pub use network::*;
pub use selector::*;
