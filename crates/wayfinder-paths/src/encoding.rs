//! Percent-encoding helpers.
//!
//! Pathnames coming from a history source are normalized by decoding every
//! escape that does not stand for a URI delimiter and re-encoding the result
//! with the `encodeURI` character set, so `/påge` and `/p%C3%A5ge` compare
//! equal. Captured route parameters are decoded component-wise.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped when re-encoding a pathname.
///
/// Everything except alphanumerics, the URI mark characters and the URI
/// delimiters. `%` is kept as is because escapes surviving [`decode_uri`]
/// are intentional.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')')
	.remove(b';')
	.remove(b'/')
	.remove(b'?')
	.remove(b':')
	.remove(b'@')
	.remove(b'&')
	.remove(b'=')
	.remove(b'+')
	.remove(b'$')
	.remove(b',')
	.remove(b'#')
	.remove(b'%');

/// Bytes whose escapes are left encoded by [`decode_uri`].
const PRESERVED_ESCAPES: &[u8] = b";/?:@&=+$,#%";

/// Decodes the escapes of a URI that do not encode a delimiter.
///
/// Returns `None` for a malformed escape or when the decoded bytes are not
/// valid UTF-8.
pub fn decode_uri(input: &str) -> Option<String> {
	let bytes = input.as_bytes();
	let mut decoded = Vec::with_capacity(bytes.len());
	let mut i = 0;

	while i < bytes.len() {
		if bytes[i] != b'%' {
			decoded.push(bytes[i]);
			i += 1;
			continue;
		}

		let escape = bytes.get(i + 1..i + 3)?;
		let value = hex_value(escape[0])? << 4 | hex_value(escape[1])?;
		if PRESERVED_ESCAPES.contains(&value) {
			decoded.extend_from_slice(&bytes[i..i + 3]);
		} else {
			decoded.push(value);
		}
		i += 3;
	}

	String::from_utf8(decoded).ok()
}

/// Encodes a URI with the `encodeURI` character set, leaving existing
/// escapes untouched.
pub fn encode_uri(input: &str) -> String {
	utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

/// Canonicalizes a raw pathname: decode, then re-encode.
///
/// A pathname that cannot be decoded is returned unchanged.
pub fn normalize_pathname(raw: &str) -> String {
	match decode_uri(raw) {
		Some(decoded) => encode_uri(&decoded),
		None => raw.to_string(),
	}
}

/// Fully decodes a single path segment, replacing invalid UTF-8 sequences.
pub fn decode_segment(segment: &str) -> String {
	percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
	match byte {
		b'0'..=b'9' => Some(byte - b'0'),
		b'a'..=b'f' => Some(byte - b'a' + 10),
		b'A'..=b'F' => Some(byte - b'A' + 10),
		_ => None,
	}
}
