//! Variant selection.
//!
//! A variant is an unbounded seed; a decoration turns it into one entry of a
//! small fixed table by taking it modulo the table length. The mapping is
//! deterministic and periodic: `v` and `v + N` always agree.

/// Pick `table[variant % N]`.
///
/// `N` must be non-zero; every table in this crate is a non-empty constant.
pub fn pick<T: Copy, const N: usize>(table: &[T; N], variant: u32) -> T {
    table[variant as usize % N]
}
