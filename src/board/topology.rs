//! Fixed card-structure layouts, one per age.
//!
//! Each layout lists which of the 20 slots start face up and the dependency
//! edges between slots. Slot indices run bottom row first, so the cards
//! available at the start of an age are the lowest indices of the table.

use crate::cards::Age;

/// Number of slots in every age structure.
pub const VERTEX_COUNT: usize = 20;

/// Shape of one age's card structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topology {
    pub age: Age,
    /// Slots dealt face up when the structure is built.
    pub face_up: &'static [usize],
    /// `(from, to)` pairs: `to` is covered until `from` is taken.
    pub edges: &'static [(usize, usize)],
}

impl Topology {
    /// Layout used for `age`.
    #[must_use]
    pub fn for_age(age: Age) -> &'static Topology {
        match age {
            Age::First => &AGE_I,
            Age::Second => &AGE_II,
            Age::Third => &AGE_III,
        }
    }

    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.face_up.contains(&index)
    }
}

/// Inverted pyramid: six cards at the bottom narrowing to two.
pub static AGE_I: Topology = Topology {
    age: Age::First,
    face_up: &[0, 1, 2, 3, 4, 5, 11, 12, 13, 14, 18, 19],
    edges: &[
        (0, 6), (1, 6), (1, 7), (2, 7), (2, 8), (3, 8), (3, 9), (4, 9), (4, 10), (5, 10),
        (6, 11), (7, 11), (7, 12), (8, 12), (8, 13), (9, 13), (9, 14), (10, 14),
        (11, 15), (12, 15), (12, 16), (13, 16), (13, 17), (14, 17),
        (15, 18), (16, 18), (16, 19), (17, 19),
    ],
};

/// Pyramid: two cards at the bottom widening to six.
pub static AGE_II: Topology = Topology {
    age: Age::Second,
    face_up: &[0, 1, 5, 6, 7, 8, 14, 15, 16, 17, 18, 19],
    edges: &[
        (0, 2), (0, 3), (1, 3), (1, 4),
        (2, 5), (2, 6), (3, 6), (3, 7), (4, 7), (4, 8),
        (5, 9), (5, 10), (6, 10), (6, 11), (7, 11), (7, 12), (8, 12), (8, 13),
        (9, 14), (9, 15), (10, 15), (10, 16), (11, 16), (11, 17), (12, 17), (12, 18),
        (13, 18), (13, 19),
    ],
};

/// Temple shape with a two-card waist in the middle.
pub static AGE_III: Topology = Topology {
    age: Age::Third,
    face_up: &[0, 1, 5, 6, 7, 8, 11, 12, 13, 14, 18, 19],
    edges: &[
        (0, 2), (0, 3), (1, 3), (1, 4),
        (2, 5), (2, 6), (3, 6), (3, 7), (4, 7), (4, 8),
        (5, 9), (6, 9), (7, 10), (8, 10),
        (9, 11), (9, 12), (10, 13), (10, 14),
        (11, 15), (12, 15), (12, 16), (13, 16), (13, 17), (14, 17),
        (15, 18), (16, 18), (16, 19), (17, 19),
    ],
};
