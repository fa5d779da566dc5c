use std::io::Write;

use tracing::debug;

use crate::algos::equality::{expect_equal, Comparison};
use crate::constants::{CLEAR_TEXT, EXPECTED, OFFSET};
use crate::errors::CipherError;
use crate::structs::ByteShift;
use crate::traits::Encryptor;

/// One self-check: shifting `input` by `offset` must produce `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case<'a> {
    pub input: &'a [u8],
    pub offset: u8,
    pub expected: &'a [u8],
}

impl Default for Case<'static> {
    fn default() -> Self {
        Case {
            input: CLEAR_TEXT,
            offset: OFFSET,
            expected: EXPECTED,
        }
    }
}

pub fn diagnostic(expected: &[u8], actual: &[u8]) -> String {
    format!(
        "Expected '{}', got '{}'",
        String::from_utf8_lossy(expected),
        String::from_utf8_lossy(actual)
    )
}

/// Runs `case` and writes one diagnostic line to `out` if it fails.
pub fn run<W: Write>(case: &Case<'_>, out: &mut W) -> Result<Comparison, CipherError> {
    let actual = ByteShift::new(case.offset).encrypt(case.input)?;
    let outcome = expect_equal(case.expected, &actual);
    debug!(?outcome, offset = case.offset, "self-check finished");

    if !outcome.is_equal() {
        writeln!(out, "{}", diagnostic(case.expected, &actual))?;
    }

    Ok(outcome)
}
