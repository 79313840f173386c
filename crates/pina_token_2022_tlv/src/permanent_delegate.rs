use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::Pubkey;
use crate::optional_pubkey;

/// State of the permanent delegate
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PermanentDelegate {
	/// Optional permanent delegate for transferring or burning tokens
	pub delegate: Pubkey,
}

impl Extension for PermanentDelegate {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::PermanentDelegate;
}

impl PermanentDelegate {
	/// The length of the `PermanentDelegate` extension data.
	pub const LEN: usize = size_of::<PermanentDelegate>();

	pub fn delegate(&self) -> Option<&Pubkey> {
		optional_pubkey(&self.delegate)
	}
}
