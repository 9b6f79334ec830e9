//! Catalan numbers: how many distinct full parenthesizations a chain admits.
//!
//! Independent of the DP tables; depends only on the chain length, never on
//! the actual dimension values.

/// Largest `n` for which [`catalan`] is exact in `u128`.
///
/// Catalan numbers grow like `4^n / n^1.5`; `C(69)` still fits in 128 bits,
/// `C(70)` does not. This is a documented precision boundary, not a silently
/// wrapping one: past it, debug builds panic.
pub const MAX_EXACT_N: usize = 69;

/// The `n`th Catalan number: the count of distinct binary bracketings of a
/// chain of `n` matrices.
///
/// Bottom-up DP, `O(n^2)` time and `O(n)` space:
/// `cat[0] = cat[1] = 1`, `cat[i] = sum of cat[j] * cat[i-j-1]` for `j < i`.
///
/// # Panics
/// In debug builds, panics if `n > MAX_EXACT_N` (u128 overflow).
pub fn catalan(n: usize) -> u128 {
    debug_assert!(
        n <= MAX_EXACT_N,
        "catalan({n}) exceeds u128; exact only through n = {MAX_EXACT_N}"
    );
    if n <= 1 {
        return 1;
    }
    let mut cat = vec![0u128; n + 1];
    cat[0] = 1;
    cat[1] = 1;
    for i in 2..=n {
        for j in 0..i {
            cat[i] += cat[j] * cat[i - j - 1];
        }
    }
    cat[n]
}
