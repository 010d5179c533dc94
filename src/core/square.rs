use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the squares of the 8x8 board, A1 in White's bottom left corner
/// - The grid coordinate view `(x, y)` counts `x` along the files and `y` down from
///   Black's back row, so `y = 0` is rank 8 and `y = 7` is rank 1

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_enum_table!(Square, [
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
]);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_enum_table!(Rank, [Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8]);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_enum_table!(File, [FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH]);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    pub const fn rank(&self) -> Rank {
        Rank::ALL[(*self as usize) >> 3]
    }

    /// Returns the file of a square
    pub const fn file(&self) -> File {
        File::ALL[(*self as usize) & 0b111]
    }

    /// Combines a pair of file and rank to create a square
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        Square::ALL[((rank as usize) << 3) + file as usize]
    }

    /// Builds a square from grid coordinates, `None` when either is outside `0..8`
    ///
    /// ## Examples
    ///
    /// ```
    /// use evolve_chess::core::Square;
    ///
    /// assert_eq!(Square::from_xy(4, 6), Some(Square::E2));
    /// assert_eq!(Square::from_xy(0, 0), Some(Square::A8));
    /// assert_eq!(Square::from_xy(8, 0), None);
    /// ```
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x < 8 && y < 8 {
            Some(Square::ALL[((7 - y as usize) << 3) + x as usize])
        } else {
            None
        }
    }

    /// Column of the square in grid coordinates (file index)
    pub const fn x(&self) -> u8 {
        self.file() as u8
    }

    /// Row of the square in grid coordinates, counted from Black's back row
    pub const fn y(&self) -> u8 {
        7 - self.rank() as u8
    }

    /// Returns the absolute distance in the ranks of two squares
    pub const fn rank_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.rank() as u8).abs_diff(sq2.rank() as u8)
    }

    /// Returns the absolute distance in the files of two squares
    pub const fn file_dist(sq1: Square, sq2: Square) -> u8 {
        (sq1.file() as u8).abs_diff(sq2.file() as u8)
    }

    /// King-step (Chebyshev) distance between two squares
    pub const fn dist(sq1: Square, sq2: Square) -> u8 {
        let rank_dist = Self::rank_dist(sq1, sq2);
        let file_dist = Self::file_dist(sq1, sq2);

        if rank_dist > file_dist { rank_dist } else { file_dist }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file in the form of its chess board representation (FileA => 'a')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'a' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank in the form of its chess board representation (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square in algebraic form (Square::E2 => "e2")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses an algebraic square ("e4"), with error checking
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = match file_char {
            'a'..='h' => File::ALL[(file_char as u8 - b'a') as usize],
            _ => return Err(ParseSquareError::InvalidFileChar(file_char)),
        };
        let rank = match rank_char {
            '1'..='8' => Rank::ALL[(rank_char as u8 - b'1') as usize],
            _ => return Err(ParseSquareError::InvalidRankChar(rank_char)),
        };

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
