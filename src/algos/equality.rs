use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equal,
    NotEqual,
}

impl Comparison {
    /// Integer status in the classic convention: 0 for equal, -1 otherwise.
    pub fn status(self) -> i32 {
        match self {
            Comparison::Equal => 0,
            Comparison::NotEqual => -1,
        }
    }

    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }
}

/// Compares two byte sequences by length, then byte by byte.
///
/// Returns on the first differing byte, so the running time leaks where the
/// inputs diverge. Do not use it on secrets.
pub fn expect_equal(expected: &[u8], actual: &[u8]) -> Comparison {
    if expected.len() != actual.len() {
        debug!(
            expected = expected.len(),
            actual = actual.len(),
            "length mismatch"
        );
        return Comparison::NotEqual;
    }

    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        if e != a {
            debug!(index = i, "byte mismatch");
            return Comparison::NotEqual;
        }
    }

    Comparison::Equal
}

#[cfg(test)]
mod tests {
    use super::{expect_equal, Comparison};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn equal_strings() {
        assert_eq!(
            expect_equal(b"Sogilis rocks!", b"Sogilis rocks!"),
            Comparison::Equal
        );
    }

    #[test]
    fn empty_sequences_are_equal() {
        assert_eq!(expect_equal(b"", b""), Comparison::Equal);
    }

    #[test]
    fn single_byte_difference() {
        assert_eq!(expect_equal(&[0, 0, 0], &[0, 1, 0]), Comparison::NotEqual);
        assert_eq!(expect_equal(b"abc", b"abd"), Comparison::NotEqual);
    }

    #[test]
    fn different_lengths() {
        assert_eq!(expect_equal(b"abc", b"abcd"), Comparison::NotEqual);
        assert_eq!(expect_equal(b"", b"a"), Comparison::NotEqual);
    }

    #[test]
    fn shared_prefix_is_not_enough() {
        // A terminator-scanning comparison would stop at the first zero here.
        assert_eq!(expect_equal(b"ab\0cd", b"ab\0ce"), Comparison::NotEqual);
    }

    #[test]
    fn reflexive_on_random_input() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let x: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(expect_equal(&x, &x.clone()), Comparison::Equal);
        }
    }

    #[test]
    fn length_mismatch_regardless_of_content() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let x: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let mut y = x.clone();
            y.push(rng.gen());
            assert_eq!(expect_equal(&x, &y), Comparison::NotEqual);
            assert_eq!(expect_equal(&y, &x), Comparison::NotEqual);
        }
    }

    #[test]
    fn status_codes() {
        assert_eq!(Comparison::Equal.status(), 0);
        assert_eq!(Comparison::NotEqual.status(), -1);
        assert!(Comparison::Equal.is_equal());
        assert!(!Comparison::NotEqual.is_equal());
    }
}
