// Copyright (C) 2026  Caprica Software Limited
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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Randomness for playlist shuffling.
//!
//! The playlist never talks to `rand` directly, it asks a [`RandomSource`]
//! for indices. Production code wraps a `rand` generator in [`RngSource`],
//! seeded from the configuration when a seed is set so shuffles can be
//! reproduced.

use rand::{Rng, SeedableRng, rngs::StdRng};

pub(crate) trait RandomSource {
    /// Returns an index chosen uniformly from `0..=upper`.
    fn pick(&mut self, upper: usize) -> usize;
}

pub(crate) struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub(crate) fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub(crate) fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Permutes `items` in place with the Fisher-Yates algorithm.
///
/// Walks the slice from the back, swapping each position `i` with a position
/// drawn from `0..=i`. Every ordering is equally likely provided the random
/// source is uniform.
pub(crate) fn fisher_yates<T>(items: &mut [T], random: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = random.pick(i);
        items.swap(i, j);
    }
}
