use crate::TlvError;
use crate::cpi_guard::CpiGuard;
use crate::default_account_state::DefaultAccountState;
use crate::interest_bearing_mint::InterestBearingConfig;
use crate::memo_transfer::MemoTransfer;
use crate::mint_close_authority::MintCloseAuthority;
use crate::permanent_delegate::PermanentDelegate;
use crate::transfer_fee::TransferFeeAmount;
use crate::transfer_fee::TransferFeeConfig;

/// Value length of `ConfidentialTransferMint`.
///
/// Fixed placeholder until confidential extensions get variable-length
/// sizing.
pub const CONFIDENTIAL_TRANSFER_MINT_LEN: usize = 97;

/// Value length of `ConfidentialTransferAccount`.
///
/// Fixed placeholder until confidential extensions get variable-length
/// sizing.
pub const CONFIDENTIAL_TRANSFER_ACCOUNT_LEN: usize = 286;

/// Extensions that can be attached to a mint or account record.
///
/// The discriminant is the little-endian `u16` tag written in front of each
/// TLV entry, so every value is pinned explicitly.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionType {
	/// Used as padding if the account size would otherwise be 355, same as a
	/// multisig
	Uninitialized = 0,
	/// Includes transfer fee rate info and accompanying authorities to withdraw
	/// and set the fee
	TransferFeeConfig = 1,
	/// Includes withheld transfer fees
	TransferFeeAmount = 2,
	/// Includes an optional mint close authority
	MintCloseAuthority = 3,
	/// Auditor configuration for confidential transfers
	ConfidentialTransferMint = 4,
	/// State for confidential transfers
	ConfidentialTransferAccount = 5,
	/// Specifies the default `Account::state` for new Accounts
	DefaultAccountState = 6,
	/// Indicates that the Account owner authority cannot be changed
	ImmutableOwner = 7,
	/// Require inbound transfers to have memo
	MemoTransfer = 8,
	/// Indicates that the tokens from this mint can't be transferred
	NonTransferable = 9,
	/// Tokens accrue interest over time
	InterestBearingConfig = 10,
	/// Locks privileged token operations from happening via CPI
	CpiGuard = 11,
	/// Includes an optional permanent delegate
	PermanentDelegate = 12,
}

impl ExtensionType {
	/// Every known extension, in tag order.
	pub const ALL: [ExtensionType; 13] = [
		ExtensionType::Uninitialized,
		ExtensionType::TransferFeeConfig,
		ExtensionType::TransferFeeAmount,
		ExtensionType::MintCloseAuthority,
		ExtensionType::ConfidentialTransferMint,
		ExtensionType::ConfidentialTransferAccount,
		ExtensionType::DefaultAccountState,
		ExtensionType::ImmutableOwner,
		ExtensionType::MemoTransfer,
		ExtensionType::NonTransferable,
		ExtensionType::InterestBearingConfig,
		ExtensionType::CpiGuard,
		ExtensionType::PermanentDelegate,
	];

	/// Length of the value region that follows this extension's TLV header.
	pub const fn type_len(self) -> usize {
		match self {
			ExtensionType::Uninitialized
			| ExtensionType::ImmutableOwner
			| ExtensionType::NonTransferable => 0,
			ExtensionType::TransferFeeConfig => TransferFeeConfig::LEN,
			ExtensionType::TransferFeeAmount => TransferFeeAmount::LEN,
			ExtensionType::MintCloseAuthority => MintCloseAuthority::LEN,
			ExtensionType::ConfidentialTransferMint => CONFIDENTIAL_TRANSFER_MINT_LEN,
			ExtensionType::ConfidentialTransferAccount => CONFIDENTIAL_TRANSFER_ACCOUNT_LEN,
			ExtensionType::DefaultAccountState => DefaultAccountState::LEN,
			ExtensionType::MemoTransfer => MemoTransfer::LEN,
			ExtensionType::InterestBearingConfig => InterestBearingConfig::LEN,
			ExtensionType::CpiGuard => CpiGuard::LEN,
			ExtensionType::PermanentDelegate => PermanentDelegate::LEN,
		}
	}

	/// The account extension implied by a mint extension.
	///
	/// Mint extensions without a per-account counterpart, and account
	/// extensions themselves, map to `Uninitialized`.
	pub const fn account_type_of_mint_type(self) -> ExtensionType {
		match self {
			ExtensionType::TransferFeeConfig => ExtensionType::TransferFeeAmount,
			ExtensionType::ConfidentialTransferMint => ExtensionType::ConfidentialTransferAccount,
			ExtensionType::Uninitialized
			| ExtensionType::TransferFeeAmount
			| ExtensionType::MintCloseAuthority
			| ExtensionType::ConfidentialTransferAccount
			| ExtensionType::DefaultAccountState
			| ExtensionType::ImmutableOwner
			| ExtensionType::MemoTransfer
			| ExtensionType::NonTransferable
			| ExtensionType::InterestBearingConfig
			| ExtensionType::CpiGuard
			| ExtensionType::PermanentDelegate => ExtensionType::Uninitialized,
		}
	}

	pub fn from_bytes(val: [u8; 2]) -> Result<Self, TlvError> {
		Self::try_from(u16::from_le_bytes(val))
	}

	pub fn to_bytes(&self) -> [u8; 2] {
		u16::to_le_bytes(*self as u16)
	}
}

impl TryFrom<u16> for ExtensionType {
	type Error = TlvError;

	fn try_from(val: u16) -> Result<Self, Self::Error> {
		let ext = match val {
			0 => ExtensionType::Uninitialized,
			1 => ExtensionType::TransferFeeConfig,
			2 => ExtensionType::TransferFeeAmount,
			3 => ExtensionType::MintCloseAuthority,
			4 => ExtensionType::ConfidentialTransferMint,
			5 => ExtensionType::ConfidentialTransferAccount,
			6 => ExtensionType::DefaultAccountState,
			7 => ExtensionType::ImmutableOwner,
			8 => ExtensionType::MemoTransfer,
			9 => ExtensionType::NonTransferable,
			10 => ExtensionType::InterestBearingConfig,
			11 => ExtensionType::CpiGuard,
			12 => ExtensionType::PermanentDelegate,
			_ => {
				log!("Unknown extension type: {}", val);
				return Err(TlvError::UnknownExtensionType(val));
			}
		};
		Ok(ext)
	}
}

impl From<ExtensionType> for u16 {
	fn from(ext: ExtensionType) -> Self {
		ext as u16
	}
}

/// Value length for a raw wire tag.
///
/// Tags outside the known set fail with
/// [`TlvError::UnknownExtensionType`]; newer extensions are not sized.
pub fn get_type_len(tag: u16) -> Result<usize, TlvError> {
	ExtensionType::try_from(tag).map(ExtensionType::type_len)
}
