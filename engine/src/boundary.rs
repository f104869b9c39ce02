use std::fmt;

/// How neighbor lookups treat coordinates that fall off the edge of the grid.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BoundaryPolicy {
    /// Off-grid neighbors are absent, so edge cells have fewer than 8.
    Finite,
    /// Coordinates wrap modulo N, so every cell has exactly 8 neighbors.
    #[default]
    Toroidal,
}

impl BoundaryPolicy {
    /// Resolves `index + delta` on an axis of length `size`, or `None` if the
    /// neighbor does not exist under this policy.
    pub fn resolve(self, index: usize, delta: isize, size: usize) -> Option<usize> {
        let target = index as isize + delta;
        match self {
            BoundaryPolicy::Finite => {
                if (0..size as isize).contains(&target) {
                    Some(target as usize)
                } else {
                    None
                }
            }
            BoundaryPolicy::Toroidal => Some(target.rem_euclid(size as isize) as usize),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryPolicy::Finite => write!(f, "finite"),
            BoundaryPolicy::Toroidal => write!(f, "toroidal"),
        }
    }
}
