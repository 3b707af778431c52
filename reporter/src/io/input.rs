//! Operand parsing from command-line tokens or a reader.

use std::borrow::Cow;
use std::io::Read;

use anyhow::{Context, Result, anyhow};

use crate::core::types::{Operand, OperandPair};
use crate::error::InputError;

/// Number of operands an evaluation takes.
pub const OPERAND_COUNT: usize = 2;

/// Parse one base-10 integer literal (optional leading sign, no whitespace).
pub fn parse_operand(token: &str) -> Result<Operand, InputError> {
    token
        .parse::<Operand>()
        .map_err(|_| InputError::InvalidNumericLiteral {
            token: token.to_string(),
        })
}

/// Parse exactly two tokens into an operand pair.
///
/// The count is checked before any token is parsed.
pub fn parse_operands<S: AsRef<str>>(tokens: &[S]) -> Result<OperandPair, InputError> {
    if tokens.len() != OPERAND_COUNT {
        return Err(InputError::InvalidArgumentCount {
            expected: OPERAND_COUNT,
            found: tokens.len(),
        });
    }
    let a = parse_operand(tokens[0].as_ref())?;
    let b = parse_operand(tokens[1].as_ref())?;
    Ok(OperandPair::new(a, b))
}

/// Read ASCII-whitespace-separated operands from `reader`, bounded by
/// `limit_bytes`.
///
/// The limit is checked on raw bytes before decoding. A token that is not
/// valid UTF-8 is reported as an invalid literal, shown lossily.
pub fn read_operands<R: Read>(reader: R, limit_bytes: usize) -> Result<OperandPair> {
    let mut buf = Vec::new();
    reader
        .take(limit_bytes as u64 + 1)
        .read_to_end(&mut buf)
        .context("read operands from stdin")?;
    if buf.len() > limit_bytes {
        return Err(anyhow!("stdin input exceeds {} bytes", limit_bytes));
    }
    let tokens: Vec<Cow<'_, str>> = buf
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .map(String::from_utf8_lossy)
        .collect();
    let pair = parse_operands(&tokens)?;
    Ok(pair)
}
