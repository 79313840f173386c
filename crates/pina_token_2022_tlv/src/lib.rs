//! Token 2022 extension TLV sizing and parsing.
//!
//! Extended mint and account records carry their base state, one account
//! type byte, and then packed `(type, length, value)` entries:
//!
//! ```text
//! base state ‖ account type (1) ‖ type (2, LE) ‖ length (2, LE) ‖ value ‖ …
//! ```
//!
//! This crate sizes such records before allocation, scans the TLV region,
//! and reads fixed-size extension values in place. It never allocates and
//! never writes to the record.

#![no_std]
#![allow(clippy::inline_always)]

#[cfg(test)]
extern crate std;

#[cfg(feature = "logs")]
macro_rules! log {
	($($arg:tt)*) => {
		::solana_program_log::log!($($arg)*);
	};
}

#[cfg(not(feature = "logs"))]
macro_rules! log {
	($($arg:tt)*) => {};
}

mod error;
mod extension_type;
mod len;
mod state;
mod tlv;

pub mod cpi_guard;
pub mod default_account_state;
pub mod immutable_owner;
pub mod interest_bearing_mint;
pub mod memo_transfer;
pub mod mint_close_authority;
pub mod non_transferable;
pub mod permanent_delegate;
pub mod transfer_fee;

use bytemuck::Pod;

pub use crate::error::*;
pub use crate::extension_type::*;
pub use crate::len::*;
pub use crate::state::*;
pub use crate::tlv::*;

/// Size of the extension type tag in each TLV entry.
pub const TYPE_SIZE: usize = 2;
/// Size of the value length in each TLV entry.
pub const LENGTH_SIZE: usize = 2;
/// Size of the account type byte that precedes the TLV entries.
pub const DISCRIMINATOR_SIZE: usize = 1;

/// Length of an account address.
pub const PUBKEY_BYTES: usize = 32;
/// Raw account address as stored in extension values.
pub type Pubkey = [u8; PUBKEY_BYTES];

/// Optional keys are stored as 32 zero bytes when unset.
#[inline(always)]
pub(crate) fn optional_pubkey(key: &Pubkey) -> Option<&Pubkey> {
	if key.iter().all(|byte| *byte == 0) {
		None
	} else {
		Some(key)
	}
}

/// Fixed-size state stored in one TLV entry.
pub trait Extension {
	const TYPE: ExtensionType;
	const LEN: usize;
	/// Record kind this extension is attached to.
	const ACCOUNT_TYPE: AccountType;
}

/// Read the `T` stored in `tlv_data`.
///
/// The first entry tagged `T::TYPE` is used. Its value must be exactly
/// `T::LEN` bytes; field contents are not checked.
pub fn get_extension<T: Extension + Pod>(tlv_data: &[u8]) -> Result<&T, TlvError> {
	let value =
		get_extension_data(T::TYPE, tlv_data).ok_or(TlvError::ExtensionNotFound(T::TYPE))?;
	let length_error = TlvError::InvalidExtensionLength {
		expected: T::LEN,
		found: value.len(),
	};

	if value.len() != T::LEN {
		return Err(length_error);
	}

	bytemuck::try_from_bytes(value).map_err(|_| length_error)
}

/// [`get_extension`] over a full mint or account record.
pub fn get_extension_from_record<T: Extension + Pod>(record: &[u8]) -> Result<&T, TlvError> {
	let tlv_data = match T::ACCOUNT_TYPE {
		AccountType::Mint => get_tlv_data::<Mint>(record)?,
		AccountType::Account => get_tlv_data::<Account>(record)?,
		AccountType::Uninitialized => {
			return Err(TlvError::InvalidAccountType(AccountType::Uninitialized as u8));
		}
	};

	get_extension(tlv_data)
}

#[cfg(test)]
mod tests {
	use std::vec;
	use std::vec::Vec;

	use super::*;
	use crate::cpi_guard::CpiGuard;
	use crate::immutable_owner::ImmutableOwner;
	use crate::memo_transfer::MemoTransfer;
	use crate::mint_close_authority::MintCloseAuthority;
	use crate::non_transferable::NonTransferable;
	use crate::permanent_delegate::PermanentDelegate;
	use crate::transfer_fee::TransferFeeAmount;
	use crate::transfer_fee::TransferFeeConfig;

	const AUTHORITY: Pubkey = [
		23, 133, 50, 97, 239, 106, 184, 83, 42, 103, 240, 83, 134, 90, 173, 49, 41, 63, 207, 7,
		207, 18, 10, 181, 185, 161, 87, 6, 84, 141, 192, 43,
	];

	fn push_entry(record: &mut Vec<u8>, extension: ExtensionType, value: &[u8]) {
		record.extend_from_slice(&extension.to_bytes());
		record.extend_from_slice(&(value.len() as u16).to_le_bytes());
		record.extend_from_slice(value);
	}

	fn mint_record() -> Vec<u8> {
		let mut record = vec![0u8; ACCOUNT_SIZE];
		// mint_authority option tag, then decimals and is_initialized
		record[0] = 1;
		record[44] = 6;
		record[45] = 1;
		record.push(AccountType::Mint as u8);

		push_entry(&mut record, ExtensionType::MintCloseAuthority, &AUTHORITY);
		push_entry(&mut record, ExtensionType::PermanentDelegate, &AUTHORITY);

		let mut transfer_fee_config = vec![0u8; TransferFeeConfig::LEN];
		transfer_fee_config[..32].copy_from_slice(&AUTHORITY);
		transfer_fee_config[32..64].copy_from_slice(&AUTHORITY);
		// older fee caps at 605; newer fee starts at epoch 10, caps at 605, 50 bps
		transfer_fee_config[80..82].copy_from_slice(&605u16.to_le_bytes());
		transfer_fee_config[90..92].copy_from_slice(&10u16.to_le_bytes());
		transfer_fee_config[98..100].copy_from_slice(&605u16.to_le_bytes());
		transfer_fee_config[106..108].copy_from_slice(&50u16.to_le_bytes());
		push_entry(&mut record, ExtensionType::TransferFeeConfig, &transfer_fee_config);
		push_entry(&mut record, ExtensionType::NonTransferable, &[]);

		record
	}

	#[test]
	fn mint_close_authority() {
		let record = mint_record();
		let extension = get_extension_from_record::<MintCloseAuthority>(&record).unwrap();
		assert_eq!(extension.close_authority(), Some(&AUTHORITY));
	}

	#[test]
	fn permanent_delegate() {
		let record = mint_record();
		let extension = get_extension_from_record::<PermanentDelegate>(&record).unwrap();
		assert_eq!(extension.delegate(), Some(&AUTHORITY));
	}

	#[test]
	fn transfer_fee_config() {
		let record = mint_record();
		let config = get_extension_from_record::<TransferFeeConfig>(&record).unwrap();

		assert_eq!(config.transfer_fee_config_authority(), Some(&AUTHORITY));
		assert_eq!(config.withheld_amount(), 0);
		assert_eq!(config.older_transfer_fee.maximum_fee(), 605);
		assert_eq!(config.newer_transfer_fee.epoch(), 10);
		assert_eq!(config.get_epoch_fee(10).transfer_fee_basis_points(), 50);
		assert_eq!(config.get_epoch_fee(10).calculate_fee(1_000), Some(5));
	}

	#[test]
	fn marker_extension() {
		let record = mint_record();
		let tlv_data = get_tlv_data::<Mint>(&record).unwrap();

		assert!(NonTransferable::is_present(tlv_data));
		assert!(!ImmutableOwner::is_present(tlv_data));
	}

	#[test]
	fn mint_extension_types() {
		let record = mint_record();
		let tlv_data = get_tlv_data::<Mint>(&record).unwrap();
		let types: Result<Vec<u16>, TlvError> = get_extension_types(tlv_data).collect();

		assert_eq!(types, Ok(vec![3, 12, 1, 9]));
		assert_eq!(
			get_account_len_for_mint_record(&record),
			Ok(get_account_len(&[
				ExtensionType::Uninitialized,
				ExtensionType::TransferFeeAmount,
			]))
		);
	}

	#[test]
	fn missing_extension() {
		let record = mint_record();
		assert_eq!(
			get_extension_from_record::<TransferFeeAmount>(&record),
			Err(TlvError::InvalidAccountType(AccountType::Mint as u8))
		);

		let tlv_data = get_tlv_data::<Mint>(&record).unwrap();
		assert_eq!(
			get_extension::<CpiGuard>(tlv_data),
			Err(TlvError::ExtensionNotFound(ExtensionType::CpiGuard))
		);
	}

	#[test]
	fn wrong_value_length() {
		let mut tlv_data = Vec::new();
		push_entry(&mut tlv_data, ExtensionType::MemoTransfer, &[1, 1]);

		assert_eq!(
			get_extension::<MemoTransfer>(&tlv_data),
			Err(TlvError::InvalidExtensionLength {
				expected: 1,
				found: 2
			})
		);
	}

	#[test]
	fn overlong_value_is_rejected() {
		// Declares 32 bytes but only 4 follow.
		let tlv_data = [3, 0, 32, 0, 1, 2, 3, 4];
		assert_eq!(
			get_extension::<MintCloseAuthority>(&tlv_data),
			Err(TlvError::InvalidExtensionLength {
				expected: 32,
				found: 4
			})
		);
	}

	#[test]
	fn account_extensions() {
		let mut record = vec![0u8; ACCOUNT_SIZE];
		record.push(AccountType::Account as u8);
		push_entry(&mut record, ExtensionType::TransferFeeAmount, &42u64.to_le_bytes());
		push_entry(&mut record, ExtensionType::ImmutableOwner, &[]);
		push_entry(&mut record, ExtensionType::MemoTransfer, &[1]);
		push_entry(&mut record, ExtensionType::CpiGuard, &[0]);

		assert_eq!(
			get_account_len(&[
				ExtensionType::TransferFeeAmount,
				ExtensionType::ImmutableOwner,
				ExtensionType::MemoTransfer,
				ExtensionType::CpiGuard,
			]),
			record.len()
		);

		let amount = get_extension_from_record::<TransferFeeAmount>(&record).unwrap();
		assert_eq!(amount.withheld_amount(), 42);
		let memo = get_extension_from_record::<MemoTransfer>(&record).unwrap();
		assert!(memo.require_incoming_transfer_memos());
		let guard = get_extension_from_record::<CpiGuard>(&record).unwrap();
		assert!(!guard.lock_cpi());

		let tlv_data = get_tlv_data::<Account>(&record).unwrap();
		assert!(ImmutableOwner::is_present(tlv_data));
	}

	#[test]
	fn account_with_zeroed_tail_has_no_extensions() {
		let account_extensions = [
			ExtensionType::TransferFeeAmount,
			ExtensionType::ConfidentialTransferAccount,
			ExtensionType::ImmutableOwner,
			ExtensionType::MemoTransfer,
			ExtensionType::CpiGuard,
		];

		for extra in (0..16).filter(|extra| *extra != 1) {
			let mut record = vec![0u8; ACCOUNT_SIZE + extra];
			if extra > 0 {
				record[ACCOUNT_SIZE] = AccountType::Account as u8;
			}
			let tlv_data = get_tlv_data::<Account>(&record).unwrap();

			for extension in account_extensions {
				assert_eq!(get_extension_data(extension, tlv_data), None, "{extra} {extension:?}");
			}
			assert_eq!(
				get_extension::<TransferFeeAmount>(tlv_data),
				Err(TlvError::ExtensionNotFound(ExtensionType::TransferFeeAmount))
			);
			assert!(!ImmutableOwner::is_present(tlv_data));
		}
	}

	#[test]
	fn record_lengths_match_allocation() {
		let record = mint_record();
		assert_eq!(
			get_mint_allocation_len(&[
				ExtensionType::MintCloseAuthority,
				ExtensionType::PermanentDelegate,
				ExtensionType::TransferFeeConfig,
				ExtensionType::NonTransferable,
			]),
			record.len()
		);
	}
}
