/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schemas for the built-in Smithy types.
//!
//! Members that target a prelude type point at one of these statics.

use crate::{Schema, ShapeId, ShapeType};

/// Schema for `smithy.api#String`
pub static STRING: Schema = Schema::simple(
    ShapeId::from_static("smithy.api#String"),
    ShapeType::String,
);

/// Schema for `smithy.api#Boolean`
pub static BOOLEAN: Schema = Schema::simple(
    ShapeId::from_static("smithy.api#Boolean"),
    ShapeType::Boolean,
);

/// Schema for `smithy.api#Byte`
pub static BYTE: Schema = Schema::simple(ShapeId::from_static("smithy.api#Byte"), ShapeType::Byte);

/// Schema for `smithy.api#Short`
pub static SHORT: Schema =
    Schema::simple(ShapeId::from_static("smithy.api#Short"), ShapeType::Short);

/// Schema for `smithy.api#Integer`
pub static INTEGER: Schema = Schema::simple(
    ShapeId::from_static("smithy.api#Integer"),
    ShapeType::Integer,
);

/// Schema for `smithy.api#Long`
pub static LONG: Schema = Schema::simple(ShapeId::from_static("smithy.api#Long"), ShapeType::Long);

/// Schema for `smithy.api#Float`
pub static FLOAT: Schema =
    Schema::simple(ShapeId::from_static("smithy.api#Float"), ShapeType::Float);

/// Schema for `smithy.api#Double`
pub static DOUBLE: Schema = Schema::simple(
    ShapeId::from_static("smithy.api#Double"),
    ShapeType::Double,
);

/// Schema for `smithy.api#Blob`
pub static BLOB: Schema = Schema::simple(ShapeId::from_static("smithy.api#Blob"), ShapeType::Blob);

/// Schema for `smithy.api#Timestamp`
pub static TIMESTAMP: Schema = Schema::simple(
    ShapeId::from_static("smithy.api#Timestamp"),
    ShapeType::Timestamp,
);

/// Schema for `smithy.api#Unit`, used by operations without an input or output.
pub static UNIT: Schema = Schema::structure(ShapeId::from_static("smithy.api#Unit"), &[]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_ids() {
        assert_eq!(STRING.shape_id().as_str(), "smithy.api#String");
        assert_eq!(TIMESTAMP.shape_id().shape_name(), Some("Timestamp"));
        assert_eq!(BLOB.shape_id().namespace(), Some("smithy.api"));
    }

    #[test]
    fn test_all_prelude_types_are_simple() {
        for schema in [
            &STRING, &BOOLEAN, &BYTE, &SHORT, &INTEGER, &LONG, &FLOAT, &DOUBLE, &BLOB, &TIMESTAMP,
        ] {
            assert!(schema.shape_type().is_simple(), "{}", schema.shape_id());
            assert!(schema.members().is_empty());
            assert_eq!(None, schema.member_name());
        }
    }

    #[test]
    fn test_unit_has_no_members() {
        assert_eq!(UNIT.shape_type(), ShapeType::Structure);
        assert!(UNIT.members().is_empty());
    }
}
