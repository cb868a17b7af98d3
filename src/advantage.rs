use std::fmt::Display;


/// How many times a roll is made and which result is kept.
///
/// With [`Advantage::Advantage`] or [`Advantage::Disadvantage`] the dice are
/// rolled twice and the higher (or lower) total is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advantage {
    /// Roll twice, keep the higher total.
    Advantage,
    /// Roll twice, keep the lower total.
    Disadvantage,
    /// Roll once.
    #[default]
    None
}

impl Advantage {
    /// Returns `true` for [`Advantage::None`].
    pub const fn is_none(&self) -> bool {
        matches!(self, Advantage::None)
    }
}

impl Display for Advantage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Advantage::Advantage => "advantage",
            Advantage::Disadvantage => "disadvantage",
            Advantage::None => ""
        };

        write!(f, "{word}")
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(Advantage::default(), Advantage::None);
        assert!(Advantage::default().is_none());
        assert!(!Advantage::Advantage.is_none());
        assert!(!Advantage::Disadvantage.is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Advantage::Advantage.to_string(), "advantage");
        assert_eq!(Advantage::Disadvantage.to_string(), "disadvantage");
        assert_eq!(Advantage::None.to_string(), "");
    }
}
