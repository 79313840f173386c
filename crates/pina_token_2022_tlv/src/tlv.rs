//! Scanning of packed `(type, length, value)` entries.
//!
//! Lengths are trusted as written. Neither scan checks a declared length
//! against the bytes that remain, so TLV data is expected to come from a
//! validated record.

use core::iter::FusedIterator;
use core::ops::Range;

use crate::ExtensionType;
use crate::LENGTH_SIZE;
use crate::TYPE_SIZE;
use crate::TlvError;

#[inline(always)]
fn read_u16(tlv_data: &[u8], index: usize) -> u16 {
	u16::from_le_bytes([tlv_data[index], tlv_data[index + 1]])
}

/// Byte range of the first value tagged `extension`.
///
/// The scan stops once a full header no longer fits. The returned range is
/// built from the declared length and may run past the end of `tlv_data`.
pub fn find_extension_range(extension: ExtensionType, tlv_data: &[u8]) -> Option<Range<usize>> {
	let extension = u16::from(extension);
	let mut extension_type_index = 0usize;

	while extension_type_index + TYPE_SIZE + LENGTH_SIZE <= tlv_data.len() {
		let entry_type = read_u16(tlv_data, extension_type_index);
		let entry_length = usize::from(read_u16(tlv_data, extension_type_index + TYPE_SIZE));
		let type_index = extension_type_index + TYPE_SIZE + LENGTH_SIZE;

		if entry_type == extension {
			return Some(type_index..type_index + entry_length);
		}

		extension_type_index = type_index + entry_length;
	}

	None
}

/// Value bytes of the first entry tagged `extension`.
///
/// A declared length that overruns the buffer yields the bytes up to the end
/// of `tlv_data`.
pub fn get_extension_data(extension: ExtensionType, tlv_data: &[u8]) -> Option<&[u8]> {
	let range = find_extension_range(extension, tlv_data)?;
	let end = range.end.min(tlv_data.len());

	Some(&tlv_data[range.start..end])
}

pub fn has_extension(extension: ExtensionType, tlv_data: &[u8]) -> bool {
	find_extension_range(extension, tlv_data).is_some()
}

/// Iterate the raw type tags of every entry in `tlv_data`, in order.
///
/// Tags are not checked against [`ExtensionType`]; unknown and repeated tags
/// are passed through.
pub fn get_extension_types(tlv_data: &[u8]) -> ExtensionTypes<'_> {
	ExtensionTypes {
		tlv_data,
		extension_type_index: 0,
		done: false,
	}
}

/// Iterator returned by [`get_extension_types`].
///
/// Keeps going while the cursor is inside the buffer, even if a full header
/// no longer fits. A header that cannot be read yields
/// [`TlvError::TruncatedHeader`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct ExtensionTypes<'a> {
	tlv_data: &'a [u8],
	extension_type_index: usize,
	done: bool,
}

impl Iterator for ExtensionTypes<'_> {
	type Item = Result<u16, TlvError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.extension_type_index >= self.tlv_data.len() {
			return None;
		}

		let index = self.extension_type_index;
		if index + TYPE_SIZE + LENGTH_SIZE > self.tlv_data.len() {
			self.done = true;
			return Some(Err(TlvError::TruncatedHeader { offset: index }));
		}

		let entry_type = read_u16(self.tlv_data, index);
		let entry_length = usize::from(read_u16(self.tlv_data, index + TYPE_SIZE));
		self.extension_type_index = index + TYPE_SIZE + LENGTH_SIZE + entry_length;

		Some(Ok(entry_type))
	}
}

impl FusedIterator for ExtensionTypes<'_> {}
