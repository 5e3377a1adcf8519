pub mod euclid;
pub mod input;
pub mod driver;
mod dbg;

pub use euclid::{euclid, gcd, Integer};
pub use input::{read_pair, parse_pair, InputError};
pub use driver::{run, DriveError, DriverConfig, GcdValue, Outcome, SignConvention, ZeroPolicy};
pub use dbg::TimeProfile;
