// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Compass direction a ship is facing. Determines where a forward move takes the ship.
///
/// The vertical axis grows downward: moving [`Heading::North`] decreases `y` and
/// moving [`Heading::South`] increases it. Moving [`Heading::East`] increases `x`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Direction of a quarter turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rotation {
    /// Counter-clockwise: North -> West -> South -> East -> North.
    Left,
    /// Clockwise: North -> East -> South -> West -> North.
    Right,
}

impl Heading {
    /// All headings in clockwise order starting from North.
    pub const ALL: &'static [Heading] =
        &[Heading::North, Heading::East, Heading::South, Heading::West];

    /// Get the heading obtained by turning a quarter turn in the given direction.
    pub fn rotate(self, rotation: Rotation) -> Self {
        match (rotation, self) {
            (Rotation::Left, Heading::North) => Heading::West,
            (Rotation::Left, Heading::West) => Heading::South,
            (Rotation::Left, Heading::South) => Heading::East,
            (Rotation::Left, Heading::East) => Heading::North,
            (Rotation::Right, Heading::North) => Heading::East,
            (Rotation::Right, Heading::East) => Heading::South,
            (Rotation::Right, Heading::South) => Heading::West,
            (Rotation::Right, Heading::West) => Heading::North,
        }
    }

    /// Unit displacement `(dx, dy)` of a single forward move along this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// Look up a heading from its single-letter abbreviation (`N`, `E`, `S`, `W`).
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Heading::North),
            "E" => Some(Heading::East),
            "S" => Some(Heading::South),
            "W" => Some(Heading::West),
            _ => None,
        }
    }

    /// Single-letter abbreviation of this heading.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.letter().encode_utf8(&mut buf))
    }
}

#[cfg(feature = "rng_gen")]
impl rand::distributions::Distribution<Heading> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        Heading::ALL[rng.gen_range(0, Heading::ALL.len())]
    }
}
