//! Regression test parameters and operations

use pixelab_core::Raster;

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current
/// check index, and accumulated failures.
pub struct RegParams {
    /// Name of the test (e.g., "conncomp")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    pub fn compare_rasters(&mut self, a: &Raster, b: &Raster) -> bool {
        self.compare_rasters_within(a, b, 0)
    }

    /// Compare two rasters, allowing each sample to differ by up to
    /// `delta`
    ///
    /// # Returns
    ///
    /// `true` if shapes match and every sample is within delta.
    pub fn compare_rasters_within(&mut self, a: &Raster, b: &Raster, delta: u8) -> bool {
        self.index += 1;

        if !a.same_shape(b) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - shape mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                a.width(),
                a.height(),
                b.width(),
                b.height()
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }

        let (da, db) = match (a, b) {
            (Raster::Gray(a), Raster::Gray(b)) => (a.data(), b.data()),
            (Raster::Rgb(a), Raster::Rgb(b)) => (a.data(), b.data()),
            _ => unreachable!("same_shape checked the variant"),
        };
        for (i, (&va, &vb)) in da.iter().zip(db).enumerate() {
            if va.abs_diff(vb) > delta {
                let msg = format!(
                    "Failure in {}_reg: raster comparison for index {} - sample {} \
                     differs ({} vs {}, allowed delta = {})",
                    self.test_name, self.index, i, va, vb, delta
                );
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelab_core::GrayRaster;

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_rasters_tolerance() {
        let a: Raster = GrayRaster::filled(3, 3, 100).unwrap().into();
        let b: Raster = GrayRaster::filled(3, 3, 102).unwrap().into();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_rasters(&a, &b));
        let mut rp = RegParams::new("test");
        assert!(rp.compare_rasters_within(&a, &b, 2));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_rasters_shape_mismatch() {
        let a: Raster = GrayRaster::filled(3, 3, 0).unwrap().into();
        let b: Raster = GrayRaster::filled(4, 3, 0).unwrap().into();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_rasters(&a, &b));
    }
}
