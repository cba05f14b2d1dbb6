use crate::utils::error::Result;

/// Holds a single example factor value.
#[derive(Debug, Clone)]
pub struct ExampleHolder {
    factor: f64,
}

impl ExampleHolder {
    /// Creates a holder with the given initial example factor.
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Overwrites the stored example factor.
    ///
    /// Accepts any `f64`, including NaN and infinities; there is no
    /// validation rule, so the call always succeeds.
    pub fn set_factor(&mut self, factor: f64) -> Result<()> {
        tracing::debug!("example factor updated: {} -> {}", self.factor(), factor);
        self.factor = factor;
        Ok(())
    }

    /// Returns the stored example factor.
    fn factor(&self) -> f64 {
        self.factor
    }
}
