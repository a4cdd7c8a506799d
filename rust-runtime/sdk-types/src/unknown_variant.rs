/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Opaque wrapper around a string an enum shape doesn't recognise.
///
/// Enums keep values added to a service after the client was built in an `Unknown`
/// variant carrying this type, so the value can still be inspected and sent back.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnknownVariantValue(String);

impl UnknownVariantValue {
    /// Wraps `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The unrecognised value as it appeared on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownVariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::UnknownVariantValue;

    #[test]
    fn keeps_the_raw_value() {
        let value = UnknownVariantValue::new("CREATOR");
        assert_eq!("CREATOR", value.as_str());
        assert_eq!("CREATOR", value.to_string());
    }
}
