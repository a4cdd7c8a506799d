/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Enumeration of Smithy shape types.
///
/// This represents the shape types the JSON protocols can carry,
/// including simple types, aggregate types, and the special member type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShapeType {
    // Simple types
    /// Boolean type
    Boolean,
    /// 8-bit signed integer
    Byte,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
    /// String restricted to a closed set of values
    Enum,
    /// Binary data
    Blob,
    /// Timestamp
    Timestamp,

    // Aggregate types
    /// List type
    List,
    /// Map type
    Map,
    /// Structure type
    Structure,

    // Member
    /// Member shape
    Member,
}

impl ShapeType {
    /// Returns true if this is a simple type.
    #[inline]
    pub fn is_simple(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Integer
                | Self::Long
                | Self::Float
                | Self::Double
                | Self::String
                | Self::Enum
                | Self::Blob
                | Self::Timestamp
        )
    }

    /// Returns true if this is an aggregate type.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        matches!(self, Self::List | Self::Map | Self::Structure)
    }

    /// Returns true if this is a member type.
    #[inline]
    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member)
    }
}

#[cfg(test)]
mod test {
    use super::ShapeType;

    #[test]
    fn classification() {
        assert!(ShapeType::String.is_simple());
        assert!(ShapeType::Enum.is_simple());
        assert!(!ShapeType::Structure.is_simple());
        assert!(ShapeType::Map.is_aggregate());
        assert!(!ShapeType::Timestamp.is_aggregate());
        assert!(ShapeType::Member.is_member());
        assert!(!ShapeType::Member.is_simple());
    }
}
