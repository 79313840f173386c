use crate::DISCRIMINATOR_SIZE;
use crate::TlvError;

/// Length of an unextended mint record.
pub const MINT_SIZE: usize = 82;
/// Length of an unextended token account record.
pub const ACCOUNT_SIZE: usize = 165;
/// Length of a legacy multisig record. No extended record may have this
/// length.
pub const MULTISIG_SIZE: usize = 355;
/// Zero bytes between an extended mint's base state and its account type
/// byte, so both record kinds keep the discriminator at [`ACCOUNT_SIZE`].
pub const EXTENSIONS_PADDING: usize = ACCOUNT_SIZE - MINT_SIZE;
/// Offset of the first TLV entry in any extended record.
pub const TLV_START_INDEX: usize = ACCOUNT_SIZE + DISCRIMINATOR_SIZE;

/// The discriminator byte written after the base state of an extended
/// record.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
	/// Marker for 0 data
	Uninitialized = 0,
	/// Mint account with additional extensions
	Mint = 1,
	/// Token holding account with additional extensions
	Account = 2,
}

impl TryFrom<u8> for AccountType {
	type Error = TlvError;

	fn try_from(val: u8) -> Result<Self, Self::Error> {
		match val {
			0 => Ok(AccountType::Uninitialized),
			1 => Ok(AccountType::Mint),
			2 => Ok(AccountType::Account),
			_ => Err(TlvError::InvalidAccountType(val)),
		}
	}
}

/// A record kind that can carry extensions.
pub trait BaseState {
	const BASE_LEN: usize;
	const ACCOUNT_TYPE: AccountType;
}

/// Configuration record of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mint;

impl BaseState for Mint {
	const ACCOUNT_TYPE: AccountType = AccountType::Mint;
	const BASE_LEN: usize = MINT_SIZE;
}

/// Balance record of one holder of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account;

impl BaseState for Account {
	const ACCOUNT_TYPE: AccountType = AccountType::Account;
	const BASE_LEN: usize = ACCOUNT_SIZE;
}

/// Split the TLV region out of a full mint or account record.
///
/// An unextended record (exactly `S::BASE_LEN` bytes, or an account of
/// [`ACCOUNT_SIZE`]) has empty TLV data. Otherwise the account type byte at
/// [`ACCOUNT_SIZE`] must match `S`.
pub fn get_tlv_data<S: BaseState>(record: &[u8]) -> Result<&[u8], TlvError> {
	let len = record.len();

	if len == S::BASE_LEN {
		return Ok(&[]);
	}

	if len == MULTISIG_SIZE {
		log!("Record length matches a multisig record");
		return Err(TlvError::MultisigCollision);
	}

	if len < ACCOUNT_SIZE {
		log!("Invalid record length: {}", len);
		return Err(TlvError::InvalidRecordLength(len));
	}

	if len == ACCOUNT_SIZE {
		// Only an account may stop here; a mint padded to this size has no
		// discriminator.
		return Err(TlvError::InvalidRecordLength(len));
	}

	let account_type = record[ACCOUNT_SIZE];
	if account_type != S::ACCOUNT_TYPE as u8 {
		log!("Invalid account type: {}", account_type);
		return Err(TlvError::InvalidAccountType(account_type));
	}

	Ok(&record[TLV_START_INDEX..])
}
