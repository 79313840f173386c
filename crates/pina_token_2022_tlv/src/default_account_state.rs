use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;

/// State of the default account state
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DefaultAccountState {
	/// Raw `AccountState` byte: 0 uninitialized, 1 initialized, 2 frozen
	pub state: u8,
}

impl Extension for DefaultAccountState {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::DefaultAccountState;
}

impl DefaultAccountState {
	/// The length of the `DefaultAccountState` extension data.
	pub const LEN: usize = size_of::<DefaultAccountState>();
}
