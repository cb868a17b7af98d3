/// Errors raised while building a roll specification or drawing dice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Zero dice, zero sides, or a modifier without a sign (or a sign without a modifier).
    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    /// A die needs at least one side to be rolled.
    #[error("Cannot roll a die with {0} sides")]
    Range(u16),
}
