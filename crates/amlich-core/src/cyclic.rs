//! Cyclic index normalization.
//!
//! Stems cycle through 10 values, branches through 12, the day officers
//! through 12 and the lunar lodges through 28.  Lookups into those tables
//! always go through [`cyclic_index`] so that any integer, including a
//! negative one, maps onto a valid slot: `((x % n) + n) % n`.

/// Normalize `x` into `0..n`.
///
/// # Panics
/// Panics if `n == 0`.
///
/// # Example
/// ```
/// use amlich_core::cyclic_index;
/// assert_eq!(cyclic_index(14, 12), 2);
/// assert_eq!(cyclic_index(-1, 12), 11);
/// ```
#[inline]
pub fn cyclic_index(x: i32, n: usize) -> usize {
    cyclic_index_i64(x as i64, n)
}

/// [`cyclic_index`] for 64-bit inputs such as Julian Day Numbers.
#[inline]
pub fn cyclic_index_i64(x: i64, n: usize) -> usize {
    assert!(n > 0, "cyclic modulus must be positive");
    x.rem_euclid(n as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_inputs_wrap() {
        assert_eq!(cyclic_index(-12, 12), 0);
        assert_eq!(cyclic_index(-13, 12), 11);
        assert_eq!(cyclic_index(-1, 28), 27);
        assert_eq!(cyclic_index_i64(-2_460_351, 10), 9);
    }

    proptest! {
        #[test]
        fn matches_double_modulo(x in -1_000_000i64..1_000_000, n in 1usize..100) {
            let m = n as i64;
            let expected = (((x % m) + m) % m) as usize;
            prop_assert_eq!(cyclic_index_i64(x, n), expected);
        }
    }
}
