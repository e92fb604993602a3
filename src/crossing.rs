// Swap Router – Plans the swaps for a sequence of desired interactions
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Works out how the paths of the two moving tokens get in each
//! other’s way. The dictator is the token heading for the pin and the
//! soldier is the one heading for the pendulum. Everything here is in
//! terms of positions.

use super::error::RouteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub dictator_first: bool,
    pub extra_dictator_swaps: i64,
    pub extra_soldier_swaps: i64,
}

/// Which ends of one path lie on the other path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub pendulum_in_dictator_path: bool,
    pub pin_in_soldier_path: bool,
    pub soldier_in_dictator_path: bool,
    pub dictator_in_soldier_path: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Fixed(Crossing),
    // The soldier’s path contains the dictator’s path
    SoldierContainsDictator,
    // The dictator’s path contains the soldier’s path
    DictatorContainsSoldier,
}

pub struct Paths<'a> {
    pub dictator_path: &'a [usize],
    pub soldier_path: &'a [usize],
    pub pendulum: usize,
    pub pin: usize,
    pub dictator: usize,
    pub soldier: usize,
}

const fn fixed(
    dictator_first: bool,
    extra_dictator_swaps: i64,
    extra_soldier_swaps: i64,
) -> Case {
    Case::Fixed(Crossing {
        dictator_first,
        extra_dictator_swaps,
        extra_soldier_swaps,
    })
}

// Indexed by the overlap flags as the bits PSDhDs, most significant
// first
static CASES: [Case; 16] = [
    fixed(true, 0, 0),
    fixed(true, 0, 0),
    fixed(false, 0, 0),
    fixed(true, 0, -1),
    fixed(false, 0, 0),
    Case::SoldierContainsDictator,
    fixed(false, 0, 0),
    fixed(true, -1, 0),
    fixed(true, 0, 0),
    fixed(true, 0, 0),
    Case::DictatorContainsSoldier,
    fixed(false, 0, -1),
    fixed(true, -1, 0),
    fixed(true, -1, 0),
    fixed(false, 0, -1),
    fixed(true, -1, 0),
];

impl Overlap {
    pub fn index(self) -> usize {
        ((self.pendulum_in_dictator_path as usize) << 3)
            | ((self.pin_in_soldier_path as usize) << 2)
            | ((self.soldier_in_dictator_path as usize) << 1)
            | (self.dictator_in_soldier_path as usize)
    }

    pub fn case(self) -> Case {
        CASES[self.index()]
    }
}

impl<'a> Paths<'a> {
    pub fn overlap(&self) -> Overlap {
        Overlap {
            pendulum_in_dictator_path: self.dictator_path.contains(&self.pendulum),
            pin_in_soldier_path: self.soldier_path.contains(&self.pin),
            soldier_in_dictator_path: self.dictator_path.contains(&self.soldier),
            dictator_in_soldier_path: self.soldier_path.contains(&self.dictator),
        }
    }

    fn defect(&self, reason: &'static str) -> RouteError {
        RouteError::GeometryDefect {
            reason,
            dictator_path: self.dictator_path.to_vec(),
            soldier_path: self.soldier_path.to_vec(),
        }
    }
}

/// Whether `node` lies strictly between `start` and `end` when walking
/// `host` from `start` towards `end`.
pub fn is_in_between(start: usize, node: usize, end: usize, host: &[usize]) -> bool {
    if start == end || node == end {
        return false;
    }

    let (Some(start_index), Some(end_index)) = (
        host.iter().position(|&n| n == start),
        host.iter().position(|&n| n == end),
    ) else {
        return false;
    };

    // No room in between, or walking backwards
    if start_index + 1 >= end_index {
        return false;
    }

    host[start_index + 1..end_index].contains(&node)
}

pub fn evaluate(paths: &Paths) -> Result<Crossing, RouteError> {
    match paths.overlap().case() {
        Case::Fixed(crossing) => Ok(crossing),
        Case::SoldierContainsDictator => {
            if is_in_between(
                paths.soldier,
                paths.pin,
                paths.dictator,
                paths.soldier_path,
            ) {
                // Heading towards each other
                Ok(Crossing {
                    dictator_first: true,
                    extra_dictator_swaps: -1,
                    extra_soldier_swaps: 0,
                })
            } else if paths.dictator == paths.pin
                || is_in_between(
                    paths.soldier,
                    paths.dictator,
                    paths.pin,
                    paths.soldier_path,
                )
            {
                // Heading the same way, or the dictator is already home
                Ok(Crossing {
                    dictator_first: true,
                    extra_dictator_swaps: 1,
                    extra_soldier_swaps: 0,
                })
            } else {
                Err(paths.defect("soldier path contains dictator path"))
            }
        },
        Case::DictatorContainsSoldier => {
            if is_in_between(
                paths.dictator,
                paths.pendulum,
                paths.soldier,
                paths.dictator_path,
            ) {
                Ok(Crossing {
                    dictator_first: false,
                    extra_dictator_swaps: 0,
                    extra_soldier_swaps: -1,
                })
            } else if paths.soldier == paths.pendulum
                || is_in_between(
                    paths.dictator,
                    paths.soldier,
                    paths.pendulum,
                    paths.dictator_path,
                )
            {
                Ok(Crossing {
                    dictator_first: false,
                    extra_dictator_swaps: 0,
                    extra_soldier_swaps: 1,
                })
            } else {
                Err(paths.defect("dictator path contains soldier path"))
            }
        },
    }
}
