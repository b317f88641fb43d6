use bytes::Bytes;

use crate::errors::*;
use crate::options::WrapperOptions;

/// Strategy for converting a logical (application-level) value to and from
/// the byte sequence stored in a binary column.
///
/// The same binary descriptor serves any logical type representable as
/// bytes; the descriptor's binder and extractor delegate the conversion
/// here. `None` stands for SQL NULL on both sides: a `None` value unwraps
/// to `None` bytes, and `None` bytes wrap back to a `None` value. That is
/// contract, not an error.
pub trait LogicalType {
    type Value;

    /// Reduce `value` to the bytes to store in the column.
    fn unwrap(
        &self,
        value: Option<&Self::Value>,
        options: &WrapperOptions,
    ) -> Result<Option<Bytes>>;

    /// Rebuild a value from the bytes read out of a column.
    fn wrap(&self, bytes: Option<Bytes>, options: &WrapperOptions) -> Result<Option<Self::Value>>;
}

/// Raw byte buffers, stored as-is.
#[derive(Copy, Clone, Debug, Default)]
pub struct BytesType;

impl LogicalType for BytesType {
    type Value = Vec<u8>;

    fn unwrap(
        &self,
        value: Option<&Self::Value>,
        _options: &WrapperOptions,
    ) -> Result<Option<Bytes>> {
        Ok(value.map(|vec| Bytes::copy_from_slice(vec)))
    }

    fn wrap(&self, bytes: Option<Bytes>, _options: &WrapperOptions) -> Result<Option<Self::Value>> {
        Ok(bytes.map(|bytes| bytes.to_vec()))
    }
}

/// Strings stored as their UTF-8 encoding. Wrapping fails if the column
/// holds bytes that aren't valid UTF-8.
#[derive(Copy, Clone, Debug, Default)]
pub struct TextType;

impl LogicalType for TextType {
    type Value = String;

    fn unwrap(
        &self,
        value: Option<&Self::Value>,
        _options: &WrapperOptions,
    ) -> Result<Option<Bytes>> {
        Ok(value.map(|string| Bytes::copy_from_slice(string.as_bytes())))
    }

    fn wrap(&self, bytes: Option<Bytes>, _options: &WrapperOptions) -> Result<Option<Self::Value>> {
        match bytes {
            Some(bytes) => Ok(Some(String::from_utf8(bytes.to_vec())?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use proptest::prelude::*;

    use super::{BytesType, LogicalType, TextType};
    use crate::options::WrapperOptions;

    #[test]
    fn test_null_passes_through() {
        let options = WrapperOptions::default();
        assert_eq!(BytesType.unwrap(None, &options).unwrap(), None);
        assert_eq!(BytesType.wrap(None, &options).unwrap(), None);
        assert_eq!(TextType.unwrap(None, &options).unwrap(), None);
        assert_eq!(TextType.wrap(None, &options).unwrap(), None);
    }

    #[test]
    fn test_text_round_trip() {
        let options = WrapperOptions::default();
        let bytes = TextType
            .unwrap(Some(&"hello".to_owned()), &options)
            .unwrap();
        assert_eq!(bytes, Some(Bytes::from_static(b"hello")));
        let value = TextType.wrap(bytes, &options).unwrap();
        assert_eq!(value, Some("hello".to_owned()));
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        let options = WrapperOptions::default();
        let bytes = Bytes::from_static(&[0xFF, 0xFE]);
        assert!(TextType.wrap(Some(bytes), &options).is_err());
    }

    proptest! {
        // Round-trip idempotence through the logical type: re-wrapping the
        // unwrapped form of a wrapped value changes nothing.
        #[test]
        fn test_wrap_unwrap_idempotent(raw in proptest::collection::vec(any::<u8>(), 0..256)) {
            let options = WrapperOptions::default();
            let wrapped = BytesType.wrap(Some(Bytes::from(raw)), &options).unwrap();
            let unwrapped = BytesType.unwrap(wrapped.as_ref(), &options).unwrap();
            let rewrapped = BytesType.wrap(unwrapped, &options).unwrap();
            prop_assert_eq!(wrapped, rewrapped);
        }
    }
}
