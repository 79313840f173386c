//! Record length calculation for a set of extensions.

use crate::ACCOUNT_SIZE;
use crate::DISCRIMINATOR_SIZE;
use crate::ExtensionType;
use crate::LENGTH_SIZE;
use crate::MINT_SIZE;
use crate::MULTISIG_SIZE;
use crate::Mint;
use crate::TYPE_SIZE;
use crate::TlvError;
use crate::get_extension_types;
use crate::get_tlv_data;

/// Running total of TLV space, counting each extension type once.
struct ExtensionSpace {
	seen: [bool; ExtensionType::ALL.len()],
	requested: bool,
	tlv_len: usize,
}

impl ExtensionSpace {
	const fn new() -> Self {
		Self {
			seen: [false; ExtensionType::ALL.len()],
			requested: false,
			tlv_len: 0,
		}
	}

	fn push(&mut self, extension: ExtensionType) {
		self.requested = true;

		let seen = &mut self.seen[extension as usize];
		if !*seen {
			*seen = true;
			self.tlv_len += extension.type_len() + TYPE_SIZE + LENGTH_SIZE;
		}
	}

	fn finish(self, base_size: usize) -> usize {
		if !self.requested {
			return base_size;
		}

		let account_len = base_size + DISCRIMINATOR_SIZE + self.tlv_len;
		if account_len == MULTISIG_SIZE {
			log!("Padding record length {} to avoid a multisig match", account_len);
			account_len + TYPE_SIZE
		} else {
			account_len
		}
	}
}

/// Record length for `base_size` bytes of base state plus the given
/// extensions.
///
/// No extensions means no discriminator and no TLV data, so `base_size` is
/// returned as is. Repeated types are only counted once. A total equal to
/// [`MULTISIG_SIZE`] is bumped by [`TYPE_SIZE`].
pub fn get_len(extension_types: &[ExtensionType], base_size: usize) -> usize {
	let mut space = ExtensionSpace::new();
	for extension in extension_types {
		space.push(*extension);
	}
	space.finish(base_size)
}

/// Like [`get_len`], but for raw wire tags.
pub fn try_get_len_for_tags(tags: &[u16], base_size: usize) -> Result<usize, TlvError> {
	let mut space = ExtensionSpace::new();
	for tag in tags {
		space.push(ExtensionType::try_from(*tag)?);
	}
	Ok(space.finish(base_size))
}

pub fn get_mint_len(extension_types: &[ExtensionType]) -> usize {
	get_len(extension_types, MINT_SIZE)
}

pub fn get_account_len(extension_types: &[ExtensionType]) -> usize {
	get_len(extension_types, ACCOUNT_SIZE)
}

/// Bytes to allocate for a mint carrying `extension_types`.
///
/// Extended mints are padded to [`ACCOUNT_SIZE`] before the discriminator,
/// so this differs from [`get_mint_len`] whenever an extension is present.
pub fn get_mint_allocation_len(extension_types: &[ExtensionType]) -> usize {
	if extension_types.is_empty() {
		MINT_SIZE
	} else {
		get_len(extension_types, ACCOUNT_SIZE)
	}
}

/// Length of a token account for a mint whose TLV data is `mint_tlv_data`.
///
/// Every mint entry takes an account slot, including those with no account
/// counterpart (they count as `Uninitialized`).
pub fn get_account_len_for_mint(mint_tlv_data: &[u8]) -> Result<usize, TlvError> {
	let mut space = ExtensionSpace::new();
	for tag in get_extension_types(mint_tlv_data) {
		let mint_extension = ExtensionType::try_from(tag?)?;
		space.push(mint_extension.account_type_of_mint_type());
	}
	Ok(space.finish(ACCOUNT_SIZE))
}

/// [`get_account_len_for_mint`] for a full mint record.
pub fn get_account_len_for_mint_record(mint_data: &[u8]) -> Result<usize, TlvError> {
	get_account_len_for_mint(get_tlv_data::<Mint>(mint_data)?)
}
