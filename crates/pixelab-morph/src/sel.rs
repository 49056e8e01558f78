//! Structuring elements
//!
//! Flat rectangular structuring elements with the anchor at the center
//! cell. Size is taken from the caller as-is; unlike the median filter,
//! no odd-size correction is applied here.

use crate::error::{MorphError, MorphResult};

/// A flat rectangular structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructElement {
    width: u32,
    height: u32,
}

impl StructElement {
    /// Create a `width` x `height` rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidElement`] if either dimension is 0.
    pub fn rect(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidElement { width, height });
        }
        Ok(Self { width, height })
    }

    /// Create a `size` x `size` square.
    pub fn square(size: u32) -> MorphResult<Self> {
        Self::rect(size, size)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Offsets of every cell relative to the anchor.
    pub(crate) fn offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let cx = (self.width / 2) as i64;
        let cy = (self.height / 2) as i64;
        (0..self.height as i64)
            .flat_map(move |dy| (0..self.width as i64).map(move |dx| (dx - cx, dy - cy)))
    }
}
