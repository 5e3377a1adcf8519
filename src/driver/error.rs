use std::io;

use thiserror::Error;

use crate::input::InputError;

/// Error generated by [run](super::run)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DriveError {
	#[error("Invalid input")]
	Input(#[from] InputError),
	#[error("Unable to write result")]
	Output(#[source] io::Error),
	#[error("The GCD of 0 and 0 is undefined")]
	ZeroPair,
}

impl PartialEq for DriveError {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Input(l0), Self::Input(r0)) => l0 == r0,
			(Self::Output(l0), Self::Output(r0)) => l0.kind() == r0.kind(),
			_ => core::mem::discriminant(self) == core::mem::discriminant(other),
		}
	}
}
