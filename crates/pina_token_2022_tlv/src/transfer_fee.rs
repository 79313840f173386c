use bytemuck::Pod;
use bytemuck::Zeroable;

use crate::AccountType;
use crate::Extension;
use crate::ExtensionType;
use crate::Pubkey;
use crate::optional_pubkey;

/// Maximum possible fee in basis points is 100%, aka 10_000 basis points
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;
const ONE_IN_BASIS_POINTS: u128 = MAX_FEE_BASIS_POINTS as u128;

/// Transfer fee configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TransferFee {
	/// First epoch where the transfer fee takes effect
	pub epoch: [u8; 8],
	/// Maximum fee assessed on transfers, expressed as an amount of tokens
	pub maximum_fee: [u8; 8],
	/// Amount of transfer collected as fees, expressed as basis points of the
	/// transfer amount, ie. increments of 0.01%
	pub transfer_fee_basis_points: [u8; 2],
}

impl TransferFee {
	pub fn epoch(&self) -> u64 {
		u64::from_le_bytes(self.epoch)
	}

	pub fn maximum_fee(&self) -> u64 {
		u64::from_le_bytes(self.maximum_fee)
	}

	pub fn transfer_fee_basis_points(&self) -> u16 {
		u16::from_le_bytes(self.transfer_fee_basis_points)
	}

	/// Fee charged on a transfer of `pre_fee_amount`, rounded up and capped
	/// at `maximum_fee`. Returns `None` on overflow.
	pub fn calculate_fee(&self, pre_fee_amount: u64) -> Option<u64> {
		let basis_points = self.transfer_fee_basis_points();
		if basis_points == 0 || pre_fee_amount == 0 {
			return Some(0);
		}

		let numerator = u128::from(pre_fee_amount).checked_mul(u128::from(basis_points))?;
		let raw_fee = numerator.div_ceil(ONE_IN_BASIS_POINTS);
		let raw_fee = u64::try_from(raw_fee).ok()?;

		Some(raw_fee.min(self.maximum_fee()))
	}
}

/// State of the transfer fee configuration
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TransferFeeConfig {
	/// Optional authority to set the fee
	pub transfer_fee_config_authority: Pubkey,
	/// Withdraw from mint instructions must be signed by this key
	pub withdraw_withheld_authority: Pubkey,
	/// Withheld transfer fee tokens that have been moved to the mint for
	/// withdrawal
	pub withheld_amount: [u8; 8],
	/// Older transfer fee, used if the current epoch < `new_transfer_fee.epoch`
	pub older_transfer_fee: TransferFee,
	/// Newer transfer fee, used if the current epoch >=
	/// `new_transfer_fee.epoch`
	pub newer_transfer_fee: TransferFee,
}

impl Extension for TransferFeeConfig {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::TransferFeeConfig;
}

impl TransferFeeConfig {
	/// The length of the `TransferFeeConfig` extension data.
	pub const LEN: usize = size_of::<TransferFeeConfig>();

	pub fn transfer_fee_config_authority(&self) -> Option<&Pubkey> {
		optional_pubkey(&self.transfer_fee_config_authority)
	}

	pub fn withdraw_withheld_authority(&self) -> Option<&Pubkey> {
		optional_pubkey(&self.withdraw_withheld_authority)
	}

	pub fn withheld_amount(&self) -> u64 {
		u64::from_le_bytes(self.withheld_amount)
	}

	/// The fee in effect during `epoch`.
	pub fn get_epoch_fee(&self, epoch: u64) -> &TransferFee {
		if epoch >= self.newer_transfer_fee.epoch() {
			&self.newer_transfer_fee
		} else {
			&self.older_transfer_fee
		}
	}
}

/// Withheld fees accumulated on a token account
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TransferFeeAmount {
	/// Amount withheld during transfers, to be harvested to the mint
	pub withheld_amount: [u8; 8],
}

impl Extension for TransferFeeAmount {
	const ACCOUNT_TYPE: AccountType = AccountType::Account;
	const LEN: usize = Self::LEN;
	const TYPE: ExtensionType = ExtensionType::TransferFeeAmount;
}

impl TransferFeeAmount {
	/// The length of the `TransferFeeAmount` extension data.
	pub const LEN: usize = size_of::<TransferFeeAmount>();

	pub fn withheld_amount(&self) -> u64 {
		u64::from_le_bytes(self.withheld_amount)
	}
}
