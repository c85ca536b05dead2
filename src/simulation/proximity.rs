//! Close-approach tracking
//!
//! Every step the full pairwise distance matrix is rebuilt and scanned for
//! its smallest off-diagonal entry. [`ProximityTracker`] keeps the smallest
//! one seen over the whole run.

use nalgebra::DMatrix;

use crate::simulation::error::{Result, SimError};
use crate::simulation::states::Body;

/// Square, symmetric, zero-diagonal matrix of body separations (m)
pub type DistanceMatrix = DMatrix<f64>;

/// Global minimum separation observed so far and the pair that achieved it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestApproach {
    pub distance: f64,
    pub a: usize, // row index of the pair
    pub b: usize, // column index of the pair
    pub step: usize, // step at which this record was set, 0 = initial state
}

/// Build the full `n x n` distance matrix for the current positions
///
/// Both `(i, j)` and `(j, i)` are computed with the same expression so the
/// matrix is exactly symmetric.
pub fn distance_matrix(bodies: &[Body]) -> DistanceMatrix {
    let n = bodies.len();
    DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            0.0
        } else {
            bodies[i].distance_to(&bodies[j])
        }
    })
}

/// Indices of the smallest off-diagonal entry
///
/// Starts from `(0, 1)` and scans row-major, only replacing on a strictly
/// smaller value, so the first minimal pair in scan order wins ties.
/// A matrix smaller than 2x2 has no pair and is rejected.
pub fn closest_pair(matrix: &DistanceMatrix) -> Result<(usize, usize)> {
    let n = matrix.nrows();
    if n < 2 || matrix.ncols() != n {
        return Err(SimError::InvalidConfiguration(format!(
            "closest pair needs a square matrix of at least 2x2, got {}x{}",
            n,
            matrix.ncols()
        )));
    }

    let mut best = (0, 1);
    let mut best_d = matrix[(0, 1)];

    for x in 0..n {
        for y in 0..n {
            if x != y && matrix[(x, y)] < best_d {
                best_d = matrix[(x, y)];
                best = (x, y);
            }
        }
    }

    Ok(best)
}

/// Running minimum of pairwise separation across a run
#[derive(Debug, Clone)]
pub struct ProximityTracker {
    record: ClosestApproach,
}

impl ProximityTracker {
    /// Seed the record from the current (pre-step) state
    /// Fails with `InvalidConfiguration` for fewer than two bodies
    pub fn new(bodies: &[Body]) -> Result<Self> {
        let matrix = distance_matrix(bodies);
        let (a, b) = closest_pair(&matrix)?;
        Ok(Self {
            record: ClosestApproach {
                distance: matrix[(a, b)],
                a,
                b,
                step: 0,
            },
        })
    }

    /// Rebuild the matrix for `bodies` and keep its minimum if it is
    /// strictly below the record. Returns true when the record changed
    pub fn observe(&mut self, bodies: &[Body], step: usize) -> Result<bool> {
        let matrix = distance_matrix(bodies);
        let (a, b) = closest_pair(&matrix)?;
        let d = matrix[(a, b)];

        if d < self.record.distance {
            self.record = ClosestApproach { distance: d, a, b, step };
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn record(&self) -> ClosestApproach {
        self.record
    }
}
