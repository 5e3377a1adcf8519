//! Read a pair of integers, compute their GCD, and write it out
mod config;
mod error;

pub use config::{DriverConfig, SignConvention, ZeroPolicy};
pub use error::DriveError;

use std::{fmt::Display, io::{BufRead, Write}};

use crate::{dbg::TimeProfile, euclid::{euclid, gcd}, input::read_pair};

/// Result printed by the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GcdValue {
    /// Nonnegative GCD ([SignConvention::NonNegative])
    Magnitude(u64),
    /// Raw Euclidean result ([SignConvention::Truncated])
    Signed(i64),
}

impl GcdValue {
    fn compute(a: i64, b: i64, sign: SignConvention) -> Self {
        match sign {
            SignConvention::NonNegative => Self::Magnitude(gcd(a, b)),
            SignConvention::Truncated => Self::Signed(euclid(a, b)),
        }
    }
}

impl Display for GcdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Magnitude(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
        }
    }
}

/// What a successful [run] read and wrote
#[derive(Clone, Debug)]
pub struct Outcome {
    pub a: i64,
    pub b: i64,
    pub result: GcdValue,
    /// Phase timings, if [DriverConfig::debug] was set
    pub profile: Option<TimeProfile>,
}

/// Read two integers from `input` and write their GCD plus a newline to `output`.
///
/// Nothing is written when the input can't be parsed or is rejected.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &DriverConfig) -> Result<Outcome, DriveError> {
    let mut tp = config.debug.then(TimeProfile::default);

    let (a, b) = read_pair(input)?;
    if let Some(tp) = tp.as_mut() {
        tp.stamp("read");
    }

    if a == 0 && b == 0 && config.zero_pair == ZeroPolicy::Reject {
        return Err(DriveError::ZeroPair);
    }

    let result = GcdValue::compute(a, b, config.sign);
    if let Some(tp) = tp.as_mut() {
        tp.stamp("compute");
    }

    writeln!(output, "{result}")
        .and_then(|()| output.flush())
        .map_err(DriveError::Output)?;
    if let Some(tp) = tp.as_mut() {
        tp.stamp("write");
    }

    Ok(Outcome {
        a,
        b,
        result,
        profile: tp,
    })
}

#[cfg(test)]
mod test {
    use std::io::{self, Cursor, Write};

    use crate::input::InputError;

    use super::{run, DriveError, DriverConfig, GcdValue, SignConvention, ZeroPolicy};

    fn run_str(input: &str, config: &DriverConfig) -> Result<String, DriveError> {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output, config)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn scenarios() {
        let config = DriverConfig::default();
        for (input, expected) in [
            ("12 18", "6\n"),
            ("0 5", "5\n"),
            ("7 0", "7\n"),
            ("17 13", "1\n"),
            ("100 75", "25\n"),
        ] {
            assert_eq!(run_str(input, &config).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn split_lines() {
        assert_eq!(run_str("12\n18\n", &DriverConfig::default()).unwrap(), "6\n");
    }

    #[test]
    fn negative_inputs() {
        let nonneg = DriverConfig::default();
        let truncated = DriverConfig::new().with_sign(SignConvention::Truncated);

        assert_eq!(run_str("-12 18", &nonneg).unwrap(), "6\n");
        assert_eq!(run_str("-12 18", &truncated).unwrap(), "-6\n");
        assert_eq!(run_str("-7 0", &truncated).unwrap(), "-7\n");
        assert_eq!(run_str("-9223372036854775808 0", &nonneg).unwrap(), "9223372036854775808\n");
        assert_eq!(run_str("-9223372036854775808 -1", &truncated).unwrap(), "-1\n");
    }

    #[test]
    fn zero_pair() {
        assert_eq!(run_str("0 0", &DriverConfig::default()).unwrap(), "0\n");

        let reject = DriverConfig::new().with_zero_pair(ZeroPolicy::Reject);
        assert_eq!(run_str("0 0", &reject), Err(DriveError::ZeroPair));
        assert_eq!(run_str("0 3", &reject).unwrap(), "3\n");
    }

    #[test]
    fn bad_input_writes_nothing() {
        let mut output = Vec::new();
        let err = run(Cursor::new("12"), &mut output, &DriverConfig::default()).unwrap_err();
        assert_eq!(err, DriveError::Input(InputError::Missing { expected: 2, found: 1 }));
        assert!(output.is_empty());

        let err = run(Cursor::new("twelve 18"), &mut output, &DriverConfig::default()).unwrap_err();
        assert!(matches!(err, DriveError::Input(InputError::Malformed { position: 1, .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn outcome() {
        let outcome = run(Cursor::new("100 75"), io::sink(), &DriverConfig::default()).unwrap();
        assert_eq!((outcome.a, outcome.b), (100, 75));
        assert_eq!(outcome.result, GcdValue::Magnitude(25));
        assert!(outcome.profile.is_none());
    }

    #[test]
    fn debug_profile() {
        let config = DriverConfig::new().with_debug(true);
        let outcome = run(Cursor::new("4 6"), io::sink(), &config).unwrap();
        let profile = outcome.profile.unwrap();
        assert_eq!(profile.names().collect::<Vec<_>>(), ["read", "compute", "write"]);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure() {
        let err = run(Cursor::new("4 6"), Closed, &DriverConfig::default()).unwrap_err();
        assert_eq!(err, DriveError::Output(io::Error::from(io::ErrorKind::BrokenPipe)));
    }
}
