//! Voxelisation of point clouds onto the integer grid.
//!
//! Every coordinate is truncated toward zero to its integer cell, the cells
//! are marked in an occupancy grid, and the occupied cells are read back in
//! ascending $(x, y, z)$ order. The result is a [`VoxelSet`]: unique,
//! deterministic, and ready to hand to the writers.
//!
//! Two grid kinds are available. [`DenseGrid`] is a direct-address
//! `ndarray` volume sized to the cloud's bounding box; its memory grows with
//! the cube of the shape's extent. [`SparseGrid`] keeps only the occupied
//! keys, which pays off for thin shapes such as helices whose bounding box is
//! mostly empty. Both produce identical voxel sets.

use std::collections::BTreeSet;

use ndarray::Array3;
use serde::{Deserialize, Serialize};

/// An integer cell coordinate in the positive octant.
pub type Voxel = [usize; 3];

/// A coordinate that can be truncated onto the voxel grid.
pub trait GridPoint {
    /// The cell containing this point.
    ///
    /// # Panics
    /// If any coordinate is negative or not finite. Clouds must be passed
    /// through [`normalise_octant`](crate::transform::normalise_octant)
    /// first.
    fn cell(&self) -> Voxel;
}

impl GridPoint for [f64; 3] {
    fn cell(&self) -> Voxel {
        self.map(|c| {
            assert!(
                c.is_finite() && c >= 0.0,
                "cannot voxelise coordinate {}: point clouds must lie in the positive octant",
                c
            );
            c as usize
        })
    }
}

impl GridPoint for Voxel {
    fn cell(&self) -> Voxel {
        *self
    }
}

/// Which occupancy grid backs a voxelisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// Direct-address dense volume.
    #[default]
    Dense,
    /// Ordered set of occupied keys.
    Sparse,
}

impl GridKind {
    /// Allocate an empty grid holding `extent[i]` cells along axis `i`.
    pub fn allocate(self, extent: [usize; 3]) -> Box<dyn OccupancyGrid> {
        match self {
            GridKind::Dense => Box::new(DenseGrid::with_extent(extent)),
            GridKind::Sparse => Box::new(SparseGrid::with_extent(extent)),
        }
    }
}

/// Binary occupancy over a bounded region of the voxel grid.
pub trait OccupancyGrid {
    /// Number of addressable cells along each axis.
    fn extent(&self) -> [usize; 3];

    /// Mark a cell as occupied.
    ///
    /// # Panics
    /// If the cell lies outside [`extent`](OccupancyGrid::extent).
    fn mark(&mut self, voxel: Voxel);

    /// The occupied cells in ascending $(x, y, z)$ order.
    fn occupied(&self) -> VoxelSet;
}

/// Dense boolean volume indexed directly by cell coordinate.
#[derive(Debug, Clone)]
pub struct DenseGrid {
    cells: Array3<bool>,
}

impl DenseGrid {
    pub fn with_extent(extent: [usize; 3]) -> Self {
        log::debug!(
            "Allocating dense grid {}x{}x{} ({} cells)",
            extent[0],
            extent[1],
            extent[2],
            extent.iter().product::<usize>()
        );
        Self {
            cells: Array3::from_elem((extent[0], extent[1], extent[2]), false),
        }
    }
}

impl OccupancyGrid for DenseGrid {
    fn extent(&self) -> [usize; 3] {
        let (nx, ny, nz) = self.cells.dim();
        [nx, ny, nz]
    }

    fn mark(&mut self, voxel: Voxel) {
        self.cells[voxel] = true;
    }

    fn occupied(&self) -> VoxelSet {
        // Standard layout: logical order is x-major, then y, then z.
        let voxels = self
            .cells
            .indexed_iter()
            .filter(|&(_, &occupied)| occupied)
            .map(|((x, y, z), _)| [x, y, z])
            .collect();
        VoxelSet { voxels }
    }
}

/// Occupied keys only; memory scales with the shape rather than its box.
#[derive(Debug, Clone)]
pub struct SparseGrid {
    extent: [usize; 3],
    cells: BTreeSet<Voxel>,
}

impl SparseGrid {
    pub fn with_extent(extent: [usize; 3]) -> Self {
        Self {
            extent,
            cells: BTreeSet::new(),
        }
    }
}

impl OccupancyGrid for SparseGrid {
    fn extent(&self) -> [usize; 3] {
        self.extent
    }

    fn mark(&mut self, voxel: Voxel) {
        assert!(
            voxel.iter().zip(&self.extent).all(|(c, n)| c < n),
            "voxel {:?} outside grid extent {:?}",
            voxel,
            self.extent
        );
        self.cells.insert(voxel);
    }

    fn occupied(&self) -> VoxelSet {
        VoxelSet {
            voxels: self.cells.iter().copied().collect(),
        }
    }
}

/// Unique voxels in ascending lexicographic $(x, y, z)$ order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
}

impl VoxelSet {
    /// Build a set from arbitrary voxels, discarding duplicates.
    pub fn from_voxels(voxels: impl IntoIterator<Item = Voxel>) -> Self {
        let mut voxels: Vec<Voxel> = voxels.into_iter().collect();
        voxels.sort_unstable();
        voxels.dedup();
        Self { voxels }
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    pub fn as_slice(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn contains(&self, voxel: &Voxel) -> bool {
        self.voxels.binary_search(voxel).is_ok()
    }

    /// Per-axis minimum, or `None` for an empty set.
    pub fn min_corner(&self) -> Option<Voxel> {
        fold_corner(&self.voxels, usize::min)
    }

    /// Per-axis maximum, or `None` for an empty set.
    pub fn max_corner(&self) -> Option<Voxel> {
        fold_corner(&self.voxels, usize::max)
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}

fn fold_corner(voxels: &[Voxel], pick: fn(usize, usize) -> usize) -> Option<Voxel> {
    let (first, rest) = voxels.split_first()?;
    Some(rest.iter().fold(*first, |acc, v| {
        [pick(acc[0], v[0]), pick(acc[1], v[1]), pick(acc[2], v[2])]
    }))
}

/// Mark every point's cell in `grid`.
pub fn rasterise<P: GridPoint>(grid: &mut dyn OccupancyGrid, points: &[P]) {
    for p in points {
        grid.mark(p.cell());
    }
}

/// Voxelise a cloud into the unique set of cells it touches.
///
/// The grid is sized one cell past the largest truncated coordinate on each
/// axis, so every point is indexable. Running this on an existing voxel set
/// returns the same set.
pub fn voxelise<P: GridPoint>(points: &[P], kind: GridKind) -> VoxelSet {
    let Some(max) = points
        .iter()
        .map(P::cell)
        .reduce(|acc, c| [acc[0].max(c[0]), acc[1].max(c[1]), acc[2].max(c[2])])
    else {
        return VoxelSet::default();
    };

    let mut grid = kind.allocate(max.map(|m| m + 1));
    rasterise(grid.as_mut(), points);
    grid.occupied()
}
