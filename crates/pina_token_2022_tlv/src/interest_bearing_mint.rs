use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::Pubkey;
use crate::optional_pubkey;

/// State for an interest-bearing token
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct InterestBearingConfig {
	/// Authority that can set the interest rate and authority
	pub rate_authority: Pubkey,
	/// Timestamp of initialization, from which to base interest calculations
	pub initialization_timestamp: [u8; 8],
	/// Average rate from initialization until the last time it was updated
	pub pre_update_average_rate: [u8; 2],
	/// Timestamp of the last update, used to calculate the total amount accrued
	pub last_update_timestamp: [u8; 8],
	/// Current rate, since the last update
	pub current_rate: [u8; 2],
}

impl Extension for InterestBearingConfig {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::InterestBearingConfig;
}

impl InterestBearingConfig {
	/// The length of the `InterestBearingConfig` extension data.
	pub const LEN: usize = size_of::<InterestBearingConfig>();

	pub fn rate_authority(&self) -> Option<&Pubkey> {
		optional_pubkey(&self.rate_authority)
	}

	pub fn initialization_timestamp(&self) -> i64 {
		i64::from_le_bytes(self.initialization_timestamp)
	}

	/// Rate in basis points.
	pub fn pre_update_average_rate(&self) -> i16 {
		i16::from_le_bytes(self.pre_update_average_rate)
	}

	pub fn last_update_timestamp(&self) -> i64 {
		i64::from_le_bytes(self.last_update_timestamp)
	}

	/// Rate in basis points.
	pub fn current_rate(&self) -> i16 {
		i16::from_le_bytes(self.current_rate)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn signed_fields() {
		let config = InterestBearingConfig {
			initialization_timestamp: (-5i64).to_le_bytes(),
			current_rate: (-25i16).to_le_bytes(),
			pre_update_average_rate: 300i16.to_le_bytes(),
			last_update_timestamp: 1_700_000_000i64.to_le_bytes(),
			..InterestBearingConfig::default()
		};

		assert_eq!(InterestBearingConfig::LEN, 52);
		assert_eq!(config.initialization_timestamp(), -5);
		assert_eq!(config.current_rate(), -25);
		assert_eq!(config.pre_update_average_rate(), 300);
		assert_eq!(config.last_update_timestamp(), 1_700_000_000);
		assert_eq!(config.rate_authority(), None);
	}
}
