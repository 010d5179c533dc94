use thiserror::Error;

/******************************************\
|==========================================|
|                Abilities                 |
|==========================================|
\******************************************/

/// # Ability representation
///
/// - The purchasable upgrades a single piece can hold
/// - Keys are written in camelCase on the wire (`addKnight`, `teleport2`, ...)

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    AddKnight, AddDiag, AddOrtho, JumpSlide, Teleport2, PawnBoost,
}

impl Ability {
    /// Number of elements in the Ability enum
    pub const NUM: usize = 6;
}

crate::impl_enum_table!(Ability, [AddKnight, AddDiag, AddOrtho, JumpSlide, Teleport2, PawnBoost]);

/******************************************\
|==========================================|
|                 Catalog                  |
|==========================================|
\******************************************/

/// Static shop entry for an ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityDef {
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u32,
    pub badge: &'static str,
}

impl Ability {
    /// Catalog entry for the ability
    pub const fn def(&self) -> &'static AbilityDef {
        use Ability::*;
        match self {
            AddKnight => &AbilityDef {
                name: "Knight Moves",
                description: "Adds full knight (L-shape) movement to this piece.",
                cost: 6,
                badge: "KN",
            },
            AddDiag => &AbilityDef {
                name: "Diagonal Slide",
                description: "Adds bishop-like diagonal sliding.",
                cost: 7,
                badge: "DG",
            },
            AddOrtho => &AbilityDef {
                name: "Orthogonal Slide",
                description: "Adds rook-like file/rank sliding.",
                cost: 7,
                badge: "OR",
            },
            JumpSlide => &AbilityDef {
                name: "Jumping Slides",
                description: "Sliding moves ignore blockers (rooks/bishops/queens).",
                cost: 10,
                badge: "JP",
            },
            Teleport2 => &AbilityDef {
                name: "Teleport (2)",
                description: "Once per charge, relocate up to 2 tiles to an empty square.",
                cost: 9,
                badge: "TP",
            },
            PawnBoost => &AbilityDef {
                name: "Pawn Boost",
                description: "Pawn may move back 1 and capture back-diagonally.",
                cost: 3,
                badge: "PB",
            },
        }
    }

    /// Point cost in the shop
    #[inline]
    pub const fn cost(&self) -> u32 {
        self.def().cost
    }

    /// The camelCase key used in commands and config
    pub const fn key(&self) -> &'static str {
        use Ability::*;
        match self {
            AddKnight => "addKnight",
            AddDiag => "addDiag",
            AddOrtho => "addOrtho",
            JumpSlide => "jumpSlide",
            Teleport2 => "teleport2",
            PawnBoost => "pawnBoost",
        }
    }

    #[inline]
    const fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Ability {
    type Err = ParseAbilityError;

    /// Parses an ability key, matching exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ability::iter()
            .find(|ability| ability.key() == s)
            .ok_or_else(|| ParseAbilityError::UnknownKey(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAbilityError {
    #[error("Unknown ability key: '{0}'")]
    UnknownKey(String),
}

/******************************************\
|==========================================|
|               Ability Set                |
|==========================================|
\******************************************/

/// # Ability set
///
/// The abilities a piece holds, one bit per [`Ability`].
/// Sets only ever grow: there is no way to remove an ability once granted.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AbilitySet(u8);

crate::impl_bit_ops!(AbilitySet);

impl AbilitySet {
    pub const NONE: AbilitySet = AbilitySet(0);

    /// Checks whether the set holds `ability`
    #[inline]
    pub const fn has(&self, ability: Ability) -> bool {
        self.0 & ability.bit() != 0
    }

    /// Adds `ability`, returning false if it was already present
    #[inline]
    pub fn insert(&mut self, ability: Ability) -> bool {
        let fresh = !self.has(ability);
        self.0 |= ability.bit();
        fresh
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Held abilities in catalog order
    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        Ability::iter().filter(|ability| self.has(*ability))
    }
}

impl From<Ability> for AbilitySet {
    fn from(ability: Ability) -> Self {
        AbilitySet(ability.bit())
    }
}

impl<const N: usize> From<[Ability; N]> for AbilitySet {
    fn from(abilities: [Ability; N]) -> Self {
        let mut set = AbilitySet::NONE;
        for ability in abilities {
            set.insert(ability);
        }
        set
    }
}

impl std::fmt::Display for AbilitySet {
    /// Displays the held abilities as their badges (`KN JP`), or `-` when empty
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }

        let badges: Vec<&str> = self.iter().map(|ability| ability.def().badge).collect();
        write!(f, "{}", badges.join(" "))
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
