/// Which code path a scan is allowed to take.
///
/// Every strategy returns the same index for the same input; they only differ
/// in how many elements are compared per step.
///
/// # Default
///
/// [`Strategy::Auto`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Use the target's vector unit (AVX2 or SSE2 on `x86_64`, NEON on `aarch64`)
    /// when the crate was compiled with it enabled, otherwise scan one
    /// element at a time.
    #[default]
    Auto,
    /// Never vectorize.
    Scalar,
    /// Use the portable 16-lane vector regardless of the target. Slower
    /// than the hardware path but available everywhere, which makes the
    /// vector body testable on any machine.
    Portable,
}

/// Configuration options for byte scans.
///
/// # Default
///
/// `strategy` defaults to [`Strategy::Auto`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Code path selection, see [`Strategy`].
    pub strategy: Strategy,
}

impl ScanOptions {
    /// Options that pin the scan to `strategy`.
    #[must_use]
    pub const fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

/// Configuration options for split operations.
///
/// A plain `bool` converts into `SplitOptions` as the value of
/// [`remove_empty_entries`](Self::remove_empty_entries), so
/// `split(s, b',', true)` and `split(s, b',', SplitOptions::remove_empty())`
/// are the same call.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SplitOptions {
    /// Whether zero-length slices are dropped from the output.
    ///
    /// When `false`, adjacent separators and separators at either end of the
    /// input produce empty slices, so `"a,,b"` splits into `"a"`, `""`,
    /// `"b"`. When `true`, runs of separators collapse and only non-empty
    /// slices are produced.
    ///
    /// # Default
    ///
    /// `false`
    pub remove_empty_entries: bool,
}

impl SplitOptions {
    /// Options with [`remove_empty_entries`](Self::remove_empty_entries)
    /// enabled.
    #[must_use]
    pub const fn remove_empty() -> Self {
        Self {
            remove_empty_entries: true,
        }
    }
}

impl From<bool> for SplitOptions {
    fn from(remove_empty_entries: bool) -> Self {
        Self {
            remove_empty_entries,
        }
    }
}
