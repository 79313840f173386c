use solana_program_error::ProgramError;

use crate::ExtensionType;

/// Errors produced while sizing or reading extension TLV data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TlvError {
	#[error("Unknown extension type: {0}")]
	UnknownExtensionType(u16),

	#[error("Truncated TLV header at offset {offset}")]
	TruncatedHeader { offset: usize },

	#[error("Extension {0:?} not found in TLV data")]
	ExtensionNotFound(ExtensionType),

	#[error("Extension value is {found} bytes, expected {expected}")]
	InvalidExtensionLength { expected: usize, found: usize },

	#[error("Record length matches a multisig record")]
	MultisigCollision,

	#[error("Record length {0} is not a valid mint or account length")]
	InvalidRecordLength(usize),

	#[error("Invalid account type byte: {0}")]
	InvalidAccountType(u8),
}

impl From<TlvError> for ProgramError {
	fn from(error: TlvError) -> Self {
		match error {
			TlvError::InvalidRecordLength(_) => ProgramError::AccountDataTooSmall,
			TlvError::UnknownExtensionType(_)
			| TlvError::TruncatedHeader { .. }
			| TlvError::ExtensionNotFound(_)
			| TlvError::InvalidExtensionLength { .. }
			| TlvError::MultisigCollision
			| TlvError::InvalidAccountType(_) => ProgramError::InvalidAccountData,
		}
	}
}
