/// Floating-point element types the audit engine can traverse.
///
/// Classification and accumulation always happen on the widened `f64` value,
/// so narrow element types pay no precision penalty during large-N summation.
/// Implementations are monomorphised; there is no runtime dispatch in the
/// reduction loops.
pub trait Element: Copy + Send + Sync + 'static {
    /// Widens the element to the extended-precision representation used by
    /// the accumulators.
    fn widen(self) -> f64;
}

impl Element for f32 {
    #[inline(always)]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Element for f64 {
    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }
}
