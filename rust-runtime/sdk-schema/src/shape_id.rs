/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A Smithy Shape ID.
///
/// Shape IDs uniquely identify shapes in a model.
/// Format: `namespace#shapeName` or `namespace#shapeName$memberName`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    value: &'static str,
}

impl ShapeId {
    /// Creates a ShapeId from a static string.
    ///
    /// # Examples
    /// ```
    /// use sdk_schema::ShapeId;
    ///
    /// let shape_id = ShapeId::from_static("smithy.api#String");
    /// assert_eq!("smithy.api#String", shape_id.as_str());
    /// ```
    pub const fn from_static(value: &'static str) -> Self {
        Self { value }
    }

    /// Returns the string representation of this ShapeId.
    pub fn as_str(&self) -> &'static str {
        self.value
    }

    /// Returns the namespace portion of the ShapeId.
    ///
    /// # Examples
    /// ```
    /// use sdk_schema::ShapeId;
    ///
    /// let shape_id = ShapeId::from_static("smithy.api#String");
    /// assert_eq!(shape_id.namespace(), Some("smithy.api"));
    /// ```
    pub fn namespace(&self) -> Option<&'static str> {
        self.value.split_once('#').map(|(ns, _)| ns)
    }

    /// Returns the shape name portion of the ShapeId.
    pub fn shape_name(&self) -> Option<&'static str> {
        self.value
            .split_once('#')
            .map(|(_, rest)| rest.split_once('$').map(|(name, _)| name).unwrap_or(rest))
    }

    /// Returns the member name if this is a member shape ID.
    ///
    /// # Examples
    /// ```
    /// use sdk_schema::ShapeId;
    ///
    /// let shape_id = ShapeId::from_static("com.amazonaws.connect#ContactFlow$State");
    /// assert_eq!(shape_id.member_name(), Some("State"));
    /// ```
    pub fn member_name(&self) -> Option<&'static str> {
        self.value
            .split_once('#')
            .and_then(|(_, rest)| rest.split_once('$').map(|(_, member)| member))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace() {
        assert_eq!(
            ShapeId::from_static("smithy.api#String").namespace(),
            Some("smithy.api")
        );
        assert_eq!(
            ShapeId::from_static("com.example#MyStruct$member").namespace(),
            Some("com.example")
        );
        assert_eq!(ShapeId::from_static("NoNamespace").namespace(), None);
    }

    #[test]
    fn test_shape_name() {
        assert_eq!(
            ShapeId::from_static("smithy.api#String").shape_name(),
            Some("String")
        );
        assert_eq!(
            ShapeId::from_static("com.example#MyStruct$member").shape_name(),
            Some("MyStruct")
        );
        assert_eq!(ShapeId::from_static("NoNamespace").shape_name(), None);
    }

    #[test]
    fn test_member_name() {
        assert_eq!(
            ShapeId::from_static("com.example#MyStruct$member").member_name(),
            Some("member")
        );
        assert_eq!(ShapeId::from_static("smithy.api#String").member_name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "com.example#MyStruct",
            ShapeId::from_static("com.example#MyStruct").to_string()
        );
    }
}
