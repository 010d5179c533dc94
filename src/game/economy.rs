use crate::core::{Colour, PieceType};

/******************************************\
|==========================================|
|                 Economy                  |
|==========================================|
\******************************************/

/// Points balance and capture tally of both colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    points: [u32; Colour::NUM],

    captured: [[u32; PieceType::NUM]; Colour::NUM],
}

impl Economy {
    pub fn new(starting_points: u32) -> Self {
        Economy {
            points: [starting_points; Colour::NUM],
            captured: [[0; PieceType::NUM]; Colour::NUM],
        }
    }

    #[inline]
    pub fn points(&self, colour: Colour) -> u32 {
        self.points[colour.index()]
    }

    /// How many pieces of type `pt` `colour` has taken
    #[inline]
    pub fn captured(&self, colour: Colour, pt: PieceType) -> u32 {
        self.captured[colour.index()][pt.index()]
    }

    /// Non-zero tally entries of `colour`, pawns first
    pub fn captures(&self, colour: Colour) -> impl Iterator<Item = (PieceType, u32)> + '_ {
        PieceType::iter()
            .map(move |pt| (pt, self.captured(colour, pt)))
            .filter(|&(_, count)| count > 0)
    }

    /// Credits `colour` with taking a piece of type `pt`: its value and one tally mark
    pub(crate) fn record_capture(&mut self, colour: Colour, pt: PieceType) {
        self.award(colour, pt.value());
        self.captured[colour.index()][pt.index()] += 1;
    }

    pub(crate) fn award(&mut self, colour: Colour, points: u32) {
        let balance = &mut self.points[colour.index()];
        *balance = balance.saturating_add(points);
    }

    /// Deducts `cost` from `colour`, or returns false and leaves the balance alone
    pub(crate) fn spend(&mut self, colour: Colour, cost: u32) -> bool {
        match self.points(colour).checked_sub(cost) {
            Some(left) => {
                self.points[colour.index()] = left;
                true
            }
            None => false,
        }
    }
}
