/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A thin wrapper over `base64-simd`

/// Decode `input` from base64 using the standard base64 alphabet
///
/// If input is not a valid base64 encoded string, this function will return `DecodeError`.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, base64_simd::Error> {
    base64_simd::STANDARD.decode_to_vec(input.as_ref().as_bytes())
}

/// Encode `input` into base64 using the standard base64 alphabet
pub fn encode(input: impl AsRef<[u8]>) -> String {
    base64_simd::STANDARD.encode_to_string(input.as_ref())
}

/// Given the length of some data in bytes, return how many bytes it would take to base64 encode
/// that data.
pub fn encoded_length(length: usize) -> usize {
    base64_simd::STANDARD.encoded_length(length)
}

#[cfg(test)]
mod test {
    use super::{decode, encode, encoded_length};

    #[test]
    fn known_values() {
        assert_eq!("", encode(b""));
        assert_eq!("QVdT", encode(b"AWS"));
        assert_eq!("aGVsbG8gd29ybGQ=", encode(b"hello world"));
        assert_eq!(b"AWS".to_vec(), decode("QVdT").unwrap());
        decode("not base64!").expect_err("invalid input");
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn round_trip(input in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = encode(&input);
            prop_assert_eq!(encoded.len(), encoded_length(input.len()));
            prop_assert_eq!(decode(&encoded).unwrap(), input);
        }
    }
}
