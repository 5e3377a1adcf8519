//! Reading the integer pair
use std::{io::{self, BufRead}, num::ParseIntError};

use thiserror::Error;

/// Number of integers the program consumes
pub const PAIR_LEN: usize = 2;

/// Longest token accepted before giving up on it
pub const MAX_TOKEN_LEN: usize = 64;

/// Error generated when [reading the input pair](read_pair)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("Unable to read input")]
    Io(#[from] io::Error),
    #[error("Not enough integers in input (expected: {expected}, found: {found})")]
    Missing {
        expected: usize,
        found: usize,
    },
    #[error("Token {position} is not a valid integer: {token:?}")]
    Malformed {
        /// 1-based index of the offending token
        position: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Token {position} is too long (maximum: {maximum} bytes)")]
    Oversized {
        position: usize,
        maximum: usize,
    },
}

impl PartialEq for InputError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(l0), Self::Io(r0)) => l0.kind() == r0.kind(),
            (Self::Missing { expected: le, found: lf }, Self::Missing { expected: re, found: rf }) => le == re && lf == rf,
            (Self::Malformed { position: lp, token: lt, source: ls }, Self::Malformed { position: rp, token: rt, source: rs }) => lp == rp && lt == rt && ls == rs,
            (Self::Oversized { position: lp, maximum: lm }, Self::Oversized { position: rp, maximum: rm }) => lp == rp && lm == rm,
            _ => false,
        }
    }
}

/// Pull the next whitespace-delimited token out of `reader`.
///
/// The delimiter after the token is left unconsumed, so nothing past the
/// token is requested from the reader once it is complete.
/// Returns `None` at end of stream.
fn next_token<R: BufRead>(reader: &mut R, position: usize) -> Result<Option<Vec<u8>>, InputError> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            return Ok((!token.is_empty()).then_some(token));
        }

        let skip = if token.is_empty() {
            buf.iter().take_while(|b| b.is_ascii_whitespace()).count()
        } else {
            0
        };
        let len = buf[skip..].iter().take_while(|b| !b.is_ascii_whitespace()).count();
        token.extend_from_slice(&buf[skip..skip + len]);
        let complete = skip + len < buf.len() && !token.is_empty();
        reader.consume(skip + len);

        if token.len() > MAX_TOKEN_LEN {
            return Err(InputError::Oversized { position, maximum: MAX_TOKEN_LEN });
        }
        if complete {
            return Ok(Some(token));
        }
    }
}

fn parse_token(token: &[u8], position: usize) -> Result<i64, InputError> {
    let token = String::from_utf8_lossy(token);
    token.parse()
        .map_err(|source| InputError::Malformed {
            position,
            token: token.into_owned(),
            source,
        })
}

/// Read the first two whitespace-separated integers from `reader`.
///
/// Stops as soon as the second token is complete; the rest of the stream
/// is never read.
pub fn read_pair<R: BufRead>(mut reader: R) -> Result<(i64, i64), InputError> {
    let mut values = [0i64; PAIR_LEN];

    for (i, value) in values.iter_mut().enumerate() {
        let position = i + 1;
        let token = next_token(&mut reader, position)?
            .ok_or(InputError::Missing { expected: PAIR_LEN, found: i })?;
        *value = parse_token(&token, position)?;
    }

    let [a, b] = values;
    Ok((a, b))
}

/// Parse the first two whitespace-separated integers of `text`.
///
/// Anything after the second token is ignored.
pub fn parse_pair(text: &str) -> Result<(i64, i64), InputError> {
    read_pair(text.as_bytes())
}
