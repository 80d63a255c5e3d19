//! Small programs that each demonstrate a different kind of program fault: a rejected
//! precondition, a logic error in a formula and an unrecovered arithmetic panic. The operations
//! live here so that they can be tested; the binaries under `src/bin` are thin drivers.

#![forbid(unsafe_code)]

pub mod array;
pub mod cli;
pub mod colour;
pub mod distance;
pub mod divider;
pub mod exit_code;
pub mod inventory;
pub mod logging;
