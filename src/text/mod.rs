//! Text tools: case conversion, counting, lorem ipsum, diffing, regex testing.
//!
//! Every function in this module is a pure string transform. The modules are
//! independent of each other and of the rest of the crate.

pub mod case;
pub mod count;
pub mod diff;
pub mod lorem;
pub mod regex_tester;
