use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;

/// State of the CPI guard
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct CpiGuard {
	/// Lock privileged token operations from happening via CPI
	pub lock_cpi: u8,
}

impl Extension for CpiGuard {
	const ACCOUNT_TYPE: AccountType = AccountType::Account;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::CpiGuard;
}

impl CpiGuard {
	/// The length of the `CpiGuard` extension data.
	pub const LEN: usize = size_of::<CpiGuard>();

	pub fn lock_cpi(&self) -> bool {
		self.lock_cpi != 0
	}
}
