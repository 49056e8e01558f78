//! Convolution kernels
//!
//! Defines the kernel structure used by the convolution routines, plus
//! named constructors for every fixed kernel in the filter bank.

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel with an explicit anchor cell.
#[derive(Debug, Clone)]
pub struct Kernel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from row-major data with the anchor at the center.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for a zero dimension or a
    /// data length that does not match the shape.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        Self::with_anchor(width, height, width / 2, height / 2, data)
    }

    /// Create a kernel with an explicit anchor cell.
    pub fn with_anchor(
        width: u32,
        height: u32,
        cx: u32,
        cy: u32,
        data: &[f32],
    ) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "zero-sized kernel: {width}x{height}"
            )));
        }
        let expected = (width * height) as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} values for {width}x{height}, got {}",
                data.len()
            )));
        }
        if cx >= width || cy >= height {
            return Err(FilterError::InvalidKernel(format!(
                "anchor ({cx},{cy}) outside {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx,
            cy,
            data: data.to_vec(),
        })
    }

    /// Flat box (averaging) kernel, all weights `1 / size^2`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 {
            return Err(FilterError::InvalidKernel("zero-sized box kernel".into()));
        }
        let n = (size * size) as usize;
        Self::from_slice(size, size, &vec![1.0 / n as f32; n])
    }

    /// The 3x3 weighted-average kernel (1-2-1 / 2-4-2 / 1-2-1, over 16).
    pub fn weighted_3x3() -> Self {
        let data = [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0].map(|v| v / 16.0);
        Self::from_slice(3, 3, &data).unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Gaussian kernel with the spread auto-derived from the size:
    /// `sigma = 0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] unless `size` is odd and
    /// nonzero.
    pub fn gaussian(size: u32) -> FilterResult<Self> {
        if size == 0 || size.is_multiple_of(2) {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian kernel size must be odd, got {size}"
            )));
        }
        let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
        let half = (size / 2) as i32;
        let mut data = Vec::with_capacity((size * size) as usize);
        let mut sum = 0.0f32;
        for y in -half..=half {
            for x in -half..=half {
                let v = (-((x * x + y * y) as f32) / (2.0 * sigma * sigma)).exp();
                data.push(v);
                sum += v;
            }
        }
        for v in &mut data {
            *v /= sum;
        }
        Self::from_slice(size, size, &data)
    }

    /// Sobel kernel for the x-direction gradient.
    pub fn sobel_x() -> Self {
        Self::from_slice(3, 3, &[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Sobel kernel for the y-direction gradient.
    pub fn sobel_y() -> Self {
        Self::from_slice(3, 3, &[-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Prewitt kernel responding to horizontal edges.
    pub fn prewitt_x() -> Self {
        Self::from_slice(3, 3, &[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, -1.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Prewitt kernel responding to vertical edges.
    pub fn prewitt_y() -> Self {
        Self::from_slice(3, 3, &[-1.0, 0.0, 1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 1.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Roberts 2x2 cross kernel, main diagonal.
    pub fn roberts_v() -> Self {
        Self::with_anchor(2, 2, 0, 0, &[1.0, 0.0, 0.0, -1.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// Roberts 2x2 cross kernel, anti-diagonal.
    pub fn roberts_h() -> Self {
        Self::with_anchor(2, 2, 0, 0, &[0.0, 1.0, -1.0, 0.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// 4-neighbor Laplacian kernel.
    pub fn laplacian() -> Self {
        Self::from_slice(3, 3, &[0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0])
            .unwrap_or_else(|_| unreachable!("shape is fixed"))
    }

    /// The 8 rotated Kirsch compass kernels, in clockwise order starting
    /// from north.
    pub fn kirsch_compass() -> [Self; 8] {
        const MASKS: [[f32; 9]; 8] = [
            [5.0, 5.0, 5.0, -3.0, 0.0, -3.0, -3.0, -3.0, -3.0],
            [-3.0, 5.0, 5.0, -3.0, 0.0, 5.0, -3.0, -3.0, -3.0],
            [-3.0, -3.0, 5.0, -3.0, 0.0, 5.0, -3.0, -3.0, 5.0],
            [-3.0, -3.0, -3.0, -3.0, 0.0, 5.0, -3.0, 5.0, 5.0],
            [-3.0, -3.0, -3.0, -3.0, 0.0, -3.0, 5.0, 5.0, 5.0],
            [-3.0, -3.0, -3.0, 5.0, 0.0, -3.0, 5.0, 5.0, -3.0],
            [5.0, -3.0, -3.0, 5.0, 0.0, -3.0, 5.0, -3.0, -3.0],
            [5.0, 5.0, -3.0, 5.0, 0.0, -3.0, -3.0, -3.0, -3.0],
        ];
        MASKS.map(|m| {
            Self::from_slice(3, 3, &m).unwrap_or_else(|_| unreachable!("shape is fixed"))
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get an element, or `None` if out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Sum of all kernel weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
