//! JSON encoding of bit arrays.
//!
//! The structured form is an array of booleans. Decoding is strict: the
//! input must be valid JSON, the top-level value must be an array and each
//! element must be `true` or `false`.

use super::CodecError;
use crate::core::bitarray::{BitArray, Packer};
use crate::error::Result;
use serde_json::Value;

/// Name of a JSON value's kind, for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn decode(text: &str) -> std::result::Result<BitArray, CodecError> {
    let value: Value = serde_json::from_str(text)?;

    let items = match &value {
        Value::Array(items) => items,
        other => return Err(CodecError::NotAnArray { found: kind(other) }),
    };

    let mut packer = Packer::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let bit = item.as_bool().ok_or(CodecError::NotABoolean {
            index,
            found: kind(item),
        })?;
        packer.push(bit);
    }

    Ok(packer.finish())
}

impl BitArray {
    /// Create a bit array from a JSON array of booleans.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::DecodeError`](crate::BitArrayError::DecodeError)
    /// if `text` is not valid JSON, is not an array, or holds a non-boolean
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_json("[true, false, true]").unwrap();
    /// assert_eq!(bits.to_bit_string(), "101");
    ///
    /// assert!(BitArray::from_json("{\"bits\": []}").is_err());
    /// assert!(BitArray::from_json("[true,").is_err());
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        decode(text).map_err(|err| {
            #[cfg(feature = "trace")]
            tracing::debug!(error = %err, "BitArray::from_json rejected input");

            err.into()
        })
    }

    /// Encode the bit array as a JSON array of booleans.
    ///
    /// # Errors
    ///
    /// Returns [`BitArrayError::DecodeError`](crate::BitArrayError::DecodeError)
    /// if the serializer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitarray::BitArray;
    ///
    /// let bits = BitArray::from_bit_string("11101");
    /// assert_eq!(bits.to_json().unwrap(), "[true,true,true,false,true]");
    /// ```
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| CodecError::from(err).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BitArrayError;

    fn decode_message(text: &str) -> String {
        match BitArray::from_json(text) {
            Err(BitArrayError::DecodeError { message }) => message,
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json() {
        let bits = BitArray::from_json("[true,true,true,false,true]").unwrap();
        assert_eq!(bits.to_bit_string(), "11101");
    }

    #[test]
    fn test_from_json_empty_array() {
        let bits = BitArray::from_json(" [ ] ").unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn test_from_json_invalid_syntax() {
        assert!(decode_message("[true, false").contains("invalid JSON"));
        assert!(decode_message("").contains("invalid JSON"));
    }

    #[test]
    fn test_from_json_not_an_array() {
        assert!(decode_message("true").contains("found boolean"));
        assert!(decode_message("\"0101\"").contains("found string"));
        assert!(decode_message("null").contains("found null"));
    }

    #[test]
    fn test_from_json_non_boolean_element() {
        let message = decode_message("[true, 0, false]");
        assert!(message.contains("element 1"));
        assert!(message.contains("number"));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(BitArray::new(0).to_json().unwrap(), "[]");
        assert_eq!(
            BitArray::from_bit_string("010").to_json().unwrap(),
            "[false,true,false]"
        );
    }

    #[test]
    fn test_json_roundtrip_across_byte_boundary() {
        let bits = BitArray::from_bit_string("10000000011");
        let restored = BitArray::from_json(&bits.to_json().unwrap()).unwrap();
        assert_eq!(restored, bits);
        assert_eq!(restored.as_bytes().len(), 2);
    }
}
