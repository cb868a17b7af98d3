use std::{fmt::Display, str::FromStr};
use rand::Rng;
use crate::{Advantage, Error, RollOutcome};


/// Direction of a flat modifier applied after the dice are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// The modifier is added to the dice sum.
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Plus,
    /// The modifier is subtracted from the dice sum.
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Minus
}

impl Sign {
    /// Turns an unsigned modifier magnitude into the signed offset it contributes to a total.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::Sign;
    ///
    /// assert_eq!(Sign::Plus.apply(3), 3);
    /// assert_eq!(Sign::Minus.apply(3), -3);
    /// ```
    pub const fn apply(self, magnitude: u16) -> i64 {
        match self {
            Sign::Plus => magnitude as i64,
            Sign::Minus => -(magnitude as i64)
        }
    }
}

impl FromStr for Sign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Sign::Plus),
            "-" => Ok(Sign::Minus),
            other => Err(Error::InvalidSpecification(format!("Unknown modifier sign '{other}'")))
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-")
        }
    }
}


/// Describes a prospective roll of the form `<quantity>d<sides>[+/-<modifier>]`,
/// optionally made with advantage or disadvantage.
///
/// Nothing is rolled until a [`RollOutcome`] is built from it, either with
/// [`RollOutcome::new()`] or the [`RollSpecification::roll()`] shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "RawSpecification", try_from = "RawSpecification"))]
pub struct RollSpecification {
    quantity: u16,
    sides: u16,
    modifier: Option<(Sign, u16)>,
    advantage: Advantage
}

impl RollSpecification {
    /// Creates a specification for `quantity` dice of `sides` sides with an optional
    /// signed modifier. The advantage state starts as [`Advantage::None`].
    ///
    /// A modifier of `0` is treated the same as no modifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpecification`] if `quantity` or `sides` is 0, or if only
    /// one of `modifier` and `sign` is given.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollSpecification, Sign, Error};
    ///
    /// let spec = RollSpecification::new(2, 6, Some(3), Some(Sign::Plus)).unwrap();
    /// assert_eq!(spec.to_string(), "2d6 + 3");
    ///
    /// let missing_sign = RollSpecification::new(2, 6, Some(3), None);
    /// assert!(matches!(missing_sign, Err(Error::InvalidSpecification(_))));
    /// ```
    pub fn new(quantity: u16, sides: u16, modifier: Option<u16>, sign: Option<Sign>) -> Result<Self, Error> {
        let modifier = match (modifier, sign) {
            (Some(0), Some(_)) | (None, None) => None,
            (Some(magnitude), Some(sign)) => Some((sign, magnitude)),
            (Some(magnitude), None) => {
                return Err(invalid(format!("Modifier {magnitude} has no sign")));
            },
            (None, Some(sign)) => {
                return Err(invalid(format!("Sign '{sign}' has no modifier")));
            }
        };

        if quantity == 0 {
            return Err(invalid("Cannot roll zero dice".into()));
        }

        if sides == 0 {
            return Err(invalid("Dice must have at least one side".into()));
        }

        Ok(Self {
            quantity,
            sides,
            modifier,
            advantage: Advantage::None
        })
    }

    /// Creates a new [`RollSpecificationBuilder`] for dice with `sides` sides.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollSpecification, Advantage};
    ///
    /// let spec = RollSpecification::builder(20)
    ///     .plus(5)
    ///     .advantage(Advantage::Advantage)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(spec.to_string(), "1d20 + 5 with advantage");
    /// ```
    pub fn builder(sides: u16) -> RollSpecificationBuilder {
        RollSpecificationBuilder::new(sides)
    }

    /// Number of dice rolled.
    pub const fn quantity(&self) -> u16 {
        self.quantity
    }

    /// Number of faces on each die.
    pub const fn sides(&self) -> u16 {
        self.sides
    }

    /// The sign and magnitude of the modifier, if there is one.
    pub const fn modifier(&self) -> Option<(Sign, u16)> {
        self.modifier
    }

    /// Whether the roll is made with advantage, disadvantage or neither.
    pub const fn advantage(&self) -> Advantage {
        self.advantage
    }

    /// Sets how the roll is made.
    pub fn set_advantage(&mut self, advantage: Advantage) {
        self.advantage = advantage;
    }

    /// Returns a copy of this specification with a different advantage state.
    /// `self` is left untouched.
    pub fn with_advantage(&self, advantage: Advantage) -> Self {
        let mut copy = self.clone();
        copy.set_advantage(advantage);
        copy
    }

    /// The modifier as an offset to the dice sum, `0` when there is none.
    pub const fn signed_modifier(&self) -> i64 {
        match self.modifier {
            Some((sign, magnitude)) => sign.apply(magnitude),
            None => 0
        }
    }

    /// Expected value of a single plain roll: the mean of the dice sum plus the modifier.
    /// The advantage state is ignored.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollSpecification, Sign};
    ///
    /// let d6 = RollSpecification::new(1, 6, None, None).unwrap();
    /// assert_eq!(d6.expected_value(), 3.5);
    ///
    /// let two_d6_plus_three = RollSpecification::new(2, 6, Some(3), Some(Sign::Plus)).unwrap();
    /// assert_eq!(two_d6_plus_three.expected_value(), 10.0);
    /// ```
    pub fn expected_value(&self) -> f64 {
        let dice = self.quantity as f64 * (self.sides as f64 + 1.0) / 2.0;
        dice + self.signed_modifier() as f64
    }

    /// Rolls the dice using the thread-local generator.
    /// Equivalent to [`RollOutcome::new(self)`](RollOutcome::new).
    pub fn roll(&self) -> RollOutcome {
        RollOutcome::new(self)
    }

    /// Rolls the dice drawing from `rng`. A seeded generator gives a reproducible outcome.
    pub fn roll_with(&self, rng: &mut impl Rng) -> RollOutcome {
        RollOutcome::with_rng(self, rng)
    }
}

impl Display for RollSpecification {
    /// Formats the specification as `<quantity>d<sides>[ <sign> <modifier>][ with <advantage>]`.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollSpecification, Advantage, Sign};
    ///
    /// let mut spec = RollSpecification::new(1, 6, Some(2), Some(Sign::Plus)).unwrap();
    /// assert_eq!(spec.to_string(), "1d6 + 2");
    ///
    /// spec.set_advantage(Advantage::Advantage);
    /// assert_eq!(spec.to_string(), "1d6 + 2 with advantage");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.quantity, self.sides)?;

        if let Some((sign, magnitude)) = self.modifier {
            write!(f, " {sign} {magnitude}")?;
        }

        if !self.advantage.is_none() {
            write!(f, " with {}", self.advantage)?;
        }

        Ok(())
    }
}

fn invalid(message: String) -> Error {
    tracing::debug!(reason = message.as_str(), "rejected roll specification");
    Error::InvalidSpecification(message)
}


/// A builder for [`RollSpecification`] with a fluent API.
///
/// Start with [`RollSpecification::builder()`], chain the setters and finish
/// with [`RollSpecificationBuilder::build()`].
#[derive(Debug, Clone)]
pub struct RollSpecificationBuilder {
    sides: u16,
    quantity: u16,
    modifier: Option<(Sign, u16)>,
    advantage: Advantage
}

impl RollSpecificationBuilder {
    /// The quantity defaults to 1, no modifier and [`Advantage::None`].
    fn new(sides: u16) -> Self {
        Self {
            sides,
            quantity: 1,
            modifier: None,
            advantage: Advantage::None
        }
    }

    /// Sets the number of dice to roll.
    pub fn quantity(mut self, quantity: u16) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the modifier applied after the dice are summed.
    pub fn modifier(mut self, sign: Sign, magnitude: u16) -> Self {
        self.modifier = Some((sign, magnitude));
        self
    }

    /// Shorthand for `modifier(Sign::Plus, magnitude)`.
    pub fn plus(self, magnitude: u16) -> Self {
        self.modifier(Sign::Plus, magnitude)
    }

    /// Shorthand for `modifier(Sign::Minus, magnitude)`.
    pub fn minus(self, magnitude: u16) -> Self {
        self.modifier(Sign::Minus, magnitude)
    }

    /// Sets whether the roll is made with advantage or disadvantage.
    pub fn advantage(mut self, advantage: Advantage) -> Self {
        self.advantage = advantage;
        self
    }

    /// Validates the configuration and builds the [`RollSpecification`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpecification`] if the quantity or the number of sides is 0.
    pub fn build(self) -> Result<RollSpecification, Error> {
        let (magnitude, sign) = match self.modifier {
            Some((sign, magnitude)) => (Some(magnitude), Some(sign)),
            None => (None, None)
        };

        let mut specification = RollSpecification::new(self.quantity, self.sides, magnitude, sign)?;
        specification.set_advantage(self.advantage);
        Ok(specification)
    }
}


#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSpecification {
    quantity: u16,
    sides: u16,
    #[serde(default)]
    modifier: Option<u16>,
    #[serde(default)]
    sign: Option<Sign>,
    #[serde(default)]
    advantage: Advantage
}

#[cfg(feature = "serde")]
impl From<RollSpecification> for RawSpecification {
    fn from(value: RollSpecification) -> Self {
        Self {
            quantity: value.quantity,
            sides: value.sides,
            modifier: value.modifier.map(|(_, magnitude)| magnitude),
            sign: value.modifier.map(|(sign, _)| sign),
            advantage: value.advantage
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpecification> for RollSpecification {
    type Error = Error;

    fn try_from(value: RawSpecification) -> Result<Self, Self::Error> {
        let mut specification = RollSpecification::new(value.quantity, value.sides, value.modifier, value.sign)?;
        specification.set_advantage(value.advantage);
        Ok(specification)
    }
}


/// A macro for conveniently creating [`RollSpecification`] instances.
///
/// # Syntax
/// - `roll!(SIDES)`: a single die (e.g. `roll!(20)` for 1d20).
/// - `roll!(SIDES, QUANTITY)`: `QUANTITY` dice (e.g. `roll!(6, 3)` for 3d6).
/// - `roll!(SIDES, QUANTITY, + MODIFIER)` or `roll!(SIDES, QUANTITY, - MODIFIER)`:
///   with a modifier (e.g. `roll!(8, 2, - 1)` for 2d8 - 1).
///
/// # Returns
/// `Result<RollSpecification, Error>` - The result of calling [`RollSpecificationBuilder::build()`].
///
/// # Examples
/// ```
/// use advantage_dice::roll;
///
/// assert_eq!(roll!(20).unwrap().to_string(), "1d20");
/// assert_eq!(roll!(6, 3).unwrap().to_string(), "3d6");
/// assert_eq!(roll!(6, 2, + 3).unwrap().to_string(), "2d6 + 3");
/// assert_eq!(roll!(8, 2, - 1).unwrap().to_string(), "2d8 - 1");
/// assert!(roll!(0).is_err());
/// ```
#[macro_export]
macro_rules! roll {
    ($sides:literal) => {
        $crate::RollSpecification::builder($sides)
            .build()
    };

    ($sides:literal, $quantity:literal) => {
        $crate::RollSpecification::builder($sides)
            .quantity($quantity)
            .build()
    };

    ($sides:literal, $quantity:literal, + $modifier:literal) => {
        $crate::RollSpecification::builder($sides)
            .quantity($quantity)
            .plus($modifier)
            .build()
    };

    ($sides:literal, $quantity:literal, - $modifier:literal) => {
        $crate::RollSpecification::builder($sides)
            .quantity($quantity)
            .minus($modifier)
            .build()
    }
}
