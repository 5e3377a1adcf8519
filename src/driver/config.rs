/// Sign of the printed result for negative inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignConvention {
	/// Print the magnitude of the GCD (never negative)
	#[default]
	NonNegative,
	/// Print the raw result of the truncating Euclidean loop
	///
	/// The sign follows the remainder propagation, e.g. `-12 18` gives `-6`.
	Truncated,
}

/// What to do with the degenerate `0 0` input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroPolicy {
	/// `gcd(0, 0) = 0`
	#[default]
	Zero,
	/// Fail with [DriveError::ZeroPair](super::DriveError::ZeroPair)
	Reject,
}

/// Configuration for [run](super::run)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
	pub sign: SignConvention,
	pub zero_pair: ZeroPolicy,
	/// Record a time profile of the read/compute/write phases
	pub debug: bool,
}

impl DriverConfig {
	pub const fn new() -> Self {
		Self {
			sign: SignConvention::NonNegative,
			zero_pair: ZeroPolicy::Zero,
			debug: false,
		}
	}

	pub fn with_sign(mut self, sign: SignConvention) -> Self {
		self.sign = sign;
		self
	}

	pub fn with_zero_pair(mut self, zero_pair: ZeroPolicy) -> Self {
		self.zero_pair = zero_pair;
		self
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}
}
