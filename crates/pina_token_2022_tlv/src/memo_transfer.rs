use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;

/// State of the memo transfer extension
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct MemoTransfer {
	/// Require transfers into this account to be accompanied by a memo
	pub require_incoming_transfer_memos: u8,
}

impl Extension for MemoTransfer {
	const ACCOUNT_TYPE: AccountType = AccountType::Account;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::MemoTransfer;
}

impl MemoTransfer {
	/// The length of the `MemoTransfer` extension data.
	pub const LEN: usize = size_of::<MemoTransfer>();

	pub fn require_incoming_transfer_memos(&self) -> bool {
		self.require_incoming_transfer_memos != 0
	}
}
