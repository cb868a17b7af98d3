use std::fmt::Display;
use rand::Rng;
use crate::{Advantage, Error, RollSpecification};


/// The concrete result of rolling a [`RollSpecification`].
///
/// Building a `RollOutcome` performs the roll: the dice are drawn once, at
/// construction, and the outcome never changes afterwards. Formatting it twice
/// yields the same text.
///
/// A roll made with advantage or disadvantage keeps both of its tries. Each try is
/// itself a plain `RollOutcome` with its own copy of the specification, and the
/// selected try comes first in [`RollOutcome::alternatives()`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollOutcome {
    specification: RollSpecification,
    faces: Vec<u16>,
    total: i64,
    chosen_from: Option<Box<[RollOutcome; 2]>>
}

impl RollOutcome {
    /// Rolls `specification` using the thread-local generator.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollOutcome, RollSpecification, Sign};
    ///
    /// let spec = RollSpecification::new(2, 6, Some(3), Some(Sign::Plus)).unwrap();
    /// let outcome = RollOutcome::new(&spec);
    ///
    /// assert_eq!(outcome.faces().len(), 2);
    /// let sum: i64 = outcome.faces().iter().map(|&face| face as i64).sum();
    /// assert_eq!(outcome.total(), sum + 3);
    /// ```
    pub fn new(specification: &RollSpecification) -> Self {
        Self::with_rng(specification, &mut rand::rng())
    }

    /// Rolls `specification` drawing every die from `rng`.
    ///
    /// A plain roll draws `quantity` dice. A roll with advantage or disadvantage
    /// builds two independent plain rolls, `2 * quantity` draws in total, and keeps
    /// the higher or lower total. On a tie the first try is kept.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{Advantage, RollOutcome, RollSpecification};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let spec = RollSpecification::builder(20)
    ///     .advantage(Advantage::Advantage)
    ///     .build()
    ///     .unwrap();
    ///
    /// let outcome = RollOutcome::with_rng(&spec, &mut StdRng::seed_from_u64(7));
    /// let [kept, other] = outcome.alternatives() else { unreachable!() };
    ///
    /// assert!(kept.total() >= other.total());
    /// assert_eq!(outcome.total(), kept.total());
    /// assert_eq!(outcome, RollOutcome::with_rng(&spec, &mut StdRng::seed_from_u64(7)));
    /// ```
    pub fn with_rng(specification: &RollSpecification, rng: &mut impl Rng) -> Self {
        let advantage = specification.advantage();
        if advantage.is_none() {
            return Self::plain(specification, rng);
        }

        let plain = specification.with_advantage(Advantage::None);
        let mut tries = [Self::with_rng(&plain, rng), Self::with_rng(&plain, rng)];

        match advantage {
            Advantage::Disadvantage => tries.sort_by(|a, b| a.total.cmp(&b.total)),
            _ => tries.sort_by(|a, b| b.total.cmp(&a.total))
        }

        tracing::debug!(
            %specification,
            kept = tries[0].total,
            discarded = tries[1].total,
            "resolved roll with {advantage}"
        );

        Self {
            specification: specification.clone(),
            faces: tries[0].faces.clone(),
            total: tries[0].total,
            chosen_from: Some(Box::new(tries))
        }
    }

    fn plain(specification: &RollSpecification, rng: &mut impl Rng) -> Self {
        let faces = generate_faces(rng, specification.quantity(), specification.sides());
        let sum: i64 = faces.iter().map(|&face| face as i64).sum();
        let total = sum + specification.signed_modifier();

        tracing::trace!(%specification, ?faces, total, "rolled dice");

        Self {
            specification: specification.clone(),
            faces,
            total,
            chosen_from: None
        }
    }

    /// The specification this outcome was rolled from, advantage state included.
    pub fn specification(&self) -> &RollSpecification {
        &self.specification
    }

    /// Die faces that count toward the total, in the order they were drawn.
    /// For a roll with advantage or disadvantage these are the faces of the kept try.
    pub fn faces(&self) -> &[u16] {
        &self.faces
    }

    /// Sum of [`RollOutcome::faces()`] plus the signed modifier.
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// The tries this outcome was chosen from, kept try first.
    ///
    /// A plain roll has exactly one try, itself, so rendering code can treat
    /// both kinds of outcome the same way.
    pub fn alternatives(&self) -> &[RollOutcome] {
        match &self.chosen_from {
            Some(tries) => &tries[..],
            None => std::slice::from_ref(self)
        }
    }

    /// The try whose faces and total this outcome adopted.
    pub fn chosen(&self) -> &RollOutcome {
        match &self.chosen_from {
            Some(tries) => &tries[0],
            None => self
        }
    }

    /// The try that was rolled and then set aside, if any.
    pub fn discarded(&self) -> Option<&RollOutcome> {
        self.chosen_from.as_ref().map(|tries| &tries[1])
    }

    /// `true` when the roll was made without advantage or disadvantage.
    pub fn is_plain(&self) -> bool {
        self.chosen_from.is_none()
    }
}

impl Display for RollOutcome {
    /// Formats the breakdown as `(<face> + <face> ...)[ <sign> <modifier>] = <total>`.
    /// A roll with advantage or disadvantage also lists both tries.
    ///
    /// # Examples
    /// ```
    /// use advantage_dice::{RollSpecification, Advantage};
    ///
    /// let spec = RollSpecification::builder(1).quantity(2).plus(3).build().unwrap();
    /// assert_eq!(spec.roll().to_string(), "(1 + 1) + 3 = 5");
    ///
    /// let spec = spec.with_advantage(Advantage::Advantage);
    /// assert_eq!(
    ///     spec.roll().to_string(),
    ///     "(1 + 1) + 3 = 5\nchosen from:\n(1 + 1) + 3 = 5\n(1 + 1) + 3 = 5\nwith advantage"
    /// );
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, ")")?;

        if let Some((sign, magnitude)) = self.specification.modifier() {
            write!(f, " {sign} {magnitude}")?;
        }

        write!(f, " = {}", self.total)?;

        if let Some(tries) = &self.chosen_from {
            write!(f, "\nchosen from:\n{}\n{}", tries[0], tries[1])?;
            write!(f, "\nwith {}", self.specification.advantage())?;
        }

        Ok(())
    }
}


/// Rolls a single die with `sides` faces.
///
/// # Errors
/// Returns [`Error::Range`] if `sides` is 0.
///
/// # Examples
/// ```
/// use advantage_dice::{roll_die, Error};
///
/// let mut rng = rand::rng();
/// let face = roll_die(&mut rng, 20).unwrap();
/// assert!((1..=20).contains(&face));
///
/// assert_eq!(roll_die(&mut rng, 0), Err(Error::Range(0)));
/// ```
pub fn roll_die(rng: &mut impl Rng, sides: u16) -> Result<u16, Error> {
    if sides == 0 {
        return Err(Error::Range(sides));
    }

    Ok(rng.random_range(1..=sides))
}

/// Rolls `quantity` dice with `sides` faces each, in draw order.
///
/// # Errors
/// Returns [`Error::Range`] if `sides` is 0, before anything is drawn.
pub fn roll_dice(rng: &mut impl Rng, quantity: u16, sides: u16) -> Result<Vec<u16>, Error> {
    if sides == 0 {
        return Err(Error::Range(sides));
    }

    Ok(generate_faces(rng, quantity, sides))
}

// `sides` must be at least 1.
fn generate_faces(rng: &mut impl Rng, quantity: u16, sides: u16) -> Vec<u16> {
    (0..quantity)
        .map(|_| rng.random_range(1..=sides))
        .collect()
}
