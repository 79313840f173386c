use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::has_extension;

/// Indicates that the Account owner authority cannot be changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmutableOwner;

impl Extension for ImmutableOwner {
	const ACCOUNT_TYPE: AccountType = AccountType::Account;
	const LEN: usize = 0;
	const TYPE: ExtensionType = ExtensionType::ImmutableOwner;
}

impl ImmutableOwner {
	/// Whether the account TLV data carries the marker.
	pub fn is_present(tlv_data: &[u8]) -> bool {
		has_extension(Self::TYPE, tlv_data)
	}
}
