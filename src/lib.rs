#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Dice rolls of the form `<quantity>d<sides>[+/-<modifier>]`, optionally made
//! with advantage or disadvantage, with a full breakdown of every result.
//!
//! ```
//! use advantage_dice::{Advantage, RollSpecification};
//!
//! let mut spec = RollSpecification::builder(20).plus(4).build().unwrap();
//! spec.set_advantage(Advantage::Advantage);
//!
//! let outcome = spec.roll();
//! println!("{spec}: {outcome}");
//! ```


#[cfg(test)]
mod specification_test_strategies;

mod error;
mod advantage;
mod specification;
mod outcome;

pub use error::Error;
pub use advantage::Advantage;
pub use specification::{RollSpecification, RollSpecificationBuilder, Sign};
pub use outcome::{RollOutcome, roll_die, roll_dice};
