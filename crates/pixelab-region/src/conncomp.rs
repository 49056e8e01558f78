//! Connected component labeling
//!
//! Two-pass labeling with union-find over a binary raster, plus the
//! colorized component view built on top of it: binarize with Otsu,
//! label, spread the labels over the tonal range, and render through
//! the jet colormap so neighboring components get distinct colors.

use crate::error::{RegionError, RegionResult};
use pixelab_color::StandardMap;
use pixelab_core::{GrayRaster, Raster};
use pixelab_segment::otsu;

/// Pixel adjacency used when growing components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Edge neighbors only
    Four,
    /// Edge and corner neighbors
    Eight,
}

impl Connectivity {
    /// Offsets of the already-visited neighbors in raster order.
    fn prior_offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &[(-1, 0), (0, -1)],
            Connectivity::Eight => &[(-1, 0), (0, -1), (-1, -1), (1, -1)],
        }
    }
}

/// Dense label assignment for one raster.
///
/// Background pixels carry label 0; components are numbered `1..=count`.
#[derive(Debug, Clone)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    count: u32,
}

impl LabelMap {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of components found.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Label at a pixel, or `None` outside the raster.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.labels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Raw labels in row-major order.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Binary mask of one component, white where the label matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOutOfRange`] unless `label` is in
    /// `1..=count`.
    pub fn component_mask(&self, label: u32) -> RegionResult<GrayRaster> {
        if label == 0 || label > self.count {
            return Err(RegionError::LabelOutOfRange {
                label,
                count: self.count,
            });
        }
        let data = self
            .labels
            .iter()
            .map(|&l| if l == label { 255 } else { 0 })
            .collect();
        Ok(GrayRaster::from_vec(self.width, self.height, data)?)
    }
}

/// Label the nonzero pixels of a binary raster.
pub fn label_components(binary: &GrayRaster, connectivity: Connectivity) -> LabelMap {
    let w = binary.width() as usize;
    let h = binary.height() as usize;
    let mut labels = vec![0u32; w * h];
    let mut uf = UnionFind::new();

    // First pass: provisional labels, merging across prior neighbors.
    for y in 0..h {
        for x in 0..w {
            if binary.get_clamped(x as i64, y as i64) == 0 {
                continue;
            }
            let mut current = 0u32;
            for &(dx, dy) in connectivity.prior_offsets() {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                    continue;
                }
                let neighbor = labels[(ny as usize) * w + nx as usize];
                if neighbor == 0 {
                    continue;
                }
                if current == 0 {
                    current = neighbor;
                } else {
                    uf.union(current, neighbor);
                }
            }
            if current == 0 {
                current = uf.make_set();
            }
            labels[y * w + x] = current;
        }
    }

    // Second pass: compress provisional labels into 1..=count.
    let mut remap = vec![0u32; uf.len() + 1];
    let mut count = 0u32;
    for label in &mut labels {
        if *label == 0 {
            continue;
        }
        let root = uf.find(*label);
        if remap[root as usize] == 0 {
            count += 1;
            remap[root as usize] = count;
        }
        *label = remap[root as usize];
    }

    LabelMap {
        width: binary.width(),
        height: binary.height(),
        labels,
        count,
    }
}

/// Colorized component view: Otsu binarization, labeling, then the
/// labels spread over `0..=255` and pushed through the jet colormap.
pub fn connected_components(src: &Raster, connectivity: Connectivity) -> Raster {
    let binary = otsu(src).to_gray();
    let map = label_components(&binary, connectivity);

    let mut normalized = binary.map(|_| 0);
    if map.count() > 0 {
        let scale = 255.0 / map.count() as f64;
        for y in 0..map.height() {
            for x in 0..map.width() {
                let label = map
                    .get(x, y)
                    .unwrap_or_else(|| unreachable!("loop bounded by map shape"));
                if label > 0 {
                    normalized.set(x, y, (label as f64 * scale).round() as u8);
                }
            }
        }
    }
    Raster::Rgb(StandardMap::Jet.lut().apply(&normalized))
}

/// Union-find over provisional labels, 1-based.
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    fn len(&self) -> usize {
        self.parent.len() - 1
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}
