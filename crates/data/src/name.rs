// ngatools modules
use ngatools_utils::f;

// crate modules
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// Fixed-width variable name field
///
/// Every variable name is stored as exactly 8 bytes of ASCII characters,
/// padded with whitespace. The raw bytes are kept as-is so the on-disk
/// contract is preserved, and only decoded to a `String` on request.
///
/// ```rust
/// # use ngatools_data::VariableName;
/// let name = VariableName::from(*b"  rho   ");
/// assert_eq!(name.decode().unwrap(), "rho");
/// ```
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableName(pub [u8; NAME_LENGTH]);

/// Width of every name field
const NAME_LENGTH: usize = 8;

impl VariableName {
    /// Size of a single name field on disk
    pub const BYTE_LENGTH: usize = NAME_LENGTH;

    /// Decode the name with all whitespace removed
    ///
    /// Whitespace is dropped wherever it appears, not just trimmed from the
    /// ends, and the remaining characters are kept in order. A field of only
    /// whitespace decodes to an empty string.
    ///
    /// Any byte outside of the ASCII range is a decoding error.
    ///
    /// ```rust
    /// # use ngatools_data::VariableName;
    /// assert_eq!(VariableName::from(*b"U VEL   ").decode().unwrap(), "UVEL");
    /// assert_eq!(VariableName::from(*b"        ").decode().unwrap(), "");
    /// assert!(VariableName::from(*b"rho\xff    ").decode().is_err());
    /// ```
    pub fn decode(&self) -> Result<String> {
        self.0
            .iter()
            .filter(|byte| !is_whitespace(**byte))
            .map(|&byte| match byte.is_ascii() {
                true => Ok(byte as char),
                false => Err(Error::Decode(f!(
                    "non-ASCII byte 0x{byte:02x} in variable name field {:?}",
                    self.0
                ))),
            })
            .collect()
    }
}

impl From<[u8; NAME_LENGTH]> for VariableName {
    fn from(bytes: [u8; NAME_LENGTH]) -> Self {
        Self(bytes)
    }
}

/// Decode a full table of 8-byte name fields
///
/// The table order defines the index of every variable in the field data, so
/// the names are returned in the same order. Names are not required to be
/// unique.
///
/// ```rust
/// # use ngatools_data::decode_name_table;
/// let names = decode_name_table(b"U       V       P       ").unwrap();
/// assert_eq!(names, vec!["U", "V", "P"]);
/// ```
pub fn decode_name_table(bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.len() % VariableName::BYTE_LENGTH != 0 {
        return Err(Error::Decode(f!(
            "name table of {} bytes, expected a multiple of {}",
            bytes.len(),
            VariableName::BYTE_LENGTH
        )));
    }

    bytes
        .chunks_exact(VariableName::BYTE_LENGTH)
        .map(|chunk| {
            let mut field = [0u8; NAME_LENGTH];
            field.copy_from_slice(chunk);
            VariableName(field).decode()
        })
        .collect()
}

/// ASCII whitespace, including the vertical tab that `u8::is_ascii_whitespace`
/// does not consider
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_name() {
        let name = VariableName::from(*b"  rho   ");
        assert_eq!(name.decode().unwrap(), "rho");
    }

    #[test]
    fn blank_name() {
        let name = VariableName::from(*b"        ");
        assert_eq!(name.decode().unwrap(), "");

        let name = VariableName::from(*b"\t\n\r\x0b\x0c   ");
        assert_eq!(name.decode().unwrap(), "");
    }

    #[test]
    fn full_width_name() {
        let name = VariableName::from(*b"velocity");
        assert_eq!(name.decode().unwrap(), "velocity");
    }

    #[test]
    fn interior_whitespace_removed() {
        let name = VariableName::from(*b" Y_ O2  ");
        assert_eq!(name.decode().unwrap(), "Y_O2");
    }

    #[test]
    fn null_bytes_are_kept() {
        let name = VariableName::from(*b"P\0      ");
        assert_eq!(name.decode().unwrap(), "P\0");
    }

    #[test]
    fn non_ascii_name() {
        let name = VariableName::from(*b"T\xc3\xa9     ");
        assert!(matches!(name.decode(), Err(Error::Decode(_))));
    }

    #[test]
    fn table_keeps_order_and_duplicates() {
        let names = decode_name_table(b"ZMIX    RHO     ZMIX    ").unwrap();
        assert_eq!(names, vec!["ZMIX", "RHO", "ZMIX"]);
    }

    #[test]
    fn table_with_partial_field() {
        assert!(matches!(
            decode_name_table(b"U       V"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn empty_table() {
        assert!(decode_name_table(&[]).unwrap().is_empty());
    }
}
