use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::Pubkey;
use crate::optional_pubkey;

/// State of the mint close authority
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct MintCloseAuthority {
	/// Optional authority to close the mint
	pub close_authority: Pubkey,
}

impl Extension for MintCloseAuthority {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::MintCloseAuthority;
}

impl MintCloseAuthority {
	/// The length of the `MintCloseAuthority` extension data.
	pub const LEN: usize = size_of::<MintCloseAuthority>();

	pub fn close_authority(&self) -> Option<&Pubkey> {
		optional_pubkey(&self.close_authority)
	}
}
