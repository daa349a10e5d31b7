//! Modular arithmetic shared by the layout and navigation code.
//!
//! Everything here is pure and total for `len > 0`.

/// Returns `x mod len` normalized into `[0, len)`, including for negative `x`.
///
/// ```
/// assert_eq!(carousel::wrap::wrap(-1, 5), 4);
/// assert_eq!(carousel::wrap::wrap(7, 5), 2);
/// ```
#[inline]
pub fn wrap(x: i64, len: usize) -> usize {
    debug_assert!(len > 0, "wrap: len must be positive");
    x.rem_euclid(len as i64) as usize
}

/// The slot (`0..len`) that panel `index` occupies when panel `first_visible` is anchored at
/// slot `first_visible_index`.
///
/// For a fixed anchor this is a bijection over `[0, len)`.
#[inline]
pub fn position_of(index: usize, first_visible: usize, first_visible_index: usize, len: usize) -> usize {
    wrap(
        index as i64 - first_visible as i64 + first_visible_index as i64,
        len,
    )
}

/// 0-based slide shown for a logical index.
#[inline]
pub fn display_index(logical: i64, len: usize) -> usize {
    wrap(logical, len)
}

/// 1-based slide label shown for a logical index.
#[inline]
pub fn display_label(logical: i64, len: usize) -> usize {
    display_index(logical, len) + 1
}
