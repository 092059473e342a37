//! Structural signal codes carried by IR tokens.

use crate::error::CodecError;

/// Structural kind of an IR token.
///
/// The signal set is closed: every token on the wire carries exactly one of
/// these codes. The catalog layer only distinguishes the composite and
/// message boundary pairs; the field-level signals pass through unexamined.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Start of a message definition. Carries schema id and version.
    BeginMessage = 1,
    /// End of a message definition.
    EndMessage = 2,
    /// Start of a composite type.
    BeginComposite = 3,
    /// End of a composite type.
    EndComposite = 4,
    /// Start of a field.
    BeginField = 5,
    /// End of a field.
    EndField = 6,
    /// Start of a repeating group.
    BeginGroup = 7,
    /// End of a repeating group.
    EndGroup = 8,
    /// Start of an enum type.
    BeginEnum = 9,
    /// One valid value of an enum.
    ValidValue = 10,
    /// End of an enum type.
    EndEnum = 11,
    /// Start of a set (bitfield) type.
    BeginSet = 12,
    /// One choice of a set.
    Choice = 13,
    /// End of a set type.
    EndSet = 14,
    /// Start of a variable-length data field.
    BeginVarData = 15,
    /// End of a variable-length data field.
    EndVarData = 16,
    /// A primitive encoding.
    Encoding = 17,
}

impl Signal {
    /// Decodes a raw signal byte found at `offset`.
    ///
    /// # Errors
    /// Returns [`CodecError::UnknownSignal`] if the byte is outside the
    /// signal set.
    pub fn from_wire(value: u8, offset: usize) -> Result<Self, CodecError> {
        Ok(match value {
            1 => Self::BeginMessage,
            2 => Self::EndMessage,
            3 => Self::BeginComposite,
            4 => Self::EndComposite,
            5 => Self::BeginField,
            6 => Self::EndField,
            7 => Self::BeginGroup,
            8 => Self::EndGroup,
            9 => Self::BeginEnum,
            10 => Self::ValidValue,
            11 => Self::EndEnum,
            12 => Self::BeginSet,
            13 => Self::Choice,
            14 => Self::EndSet,
            15 => Self::BeginVarData,
            16 => Self::EndVarData,
            17 => Self::Encoding,
            value => return Err(CodecError::UnknownSignal { value, offset }),
        })
    }
}
