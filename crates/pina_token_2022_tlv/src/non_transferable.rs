use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::has_extension;

/// Indicates that the tokens from this mint can't be transferred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonTransferable;

impl Extension for NonTransferable {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = 0;
	const TYPE: ExtensionType = ExtensionType::NonTransferable;
}

impl NonTransferable {
	/// Whether the mint TLV data carries the marker.
	pub fn is_present(tlv_data: &[u8]) -> bool {
		has_extension(Self::TYPE, tlv_data)
	}
}
