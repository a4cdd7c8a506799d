/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{Schema, ShapeType};
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

const DEFAULT_MAX_DEPTH: usize = 64;

/// Error building a [`ShapeRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two different schemas were declared with the same shape ID.
    ConflictingDefinition {
        /// The duplicated shape ID.
        shape_id: &'static str,
    },
    /// A structure member was declared at a position that doesn't match its member index.
    MemberOutOfOrder {
        /// The structure's shape ID.
        shape_id: &'static str,
        /// The member name.
        member: &'static str,
    },
    /// Walking the shape closure went deeper than the configured bound.
    DepthExceeded {
        /// The shape ID at which the bound was hit.
        shape_id: &'static str,
        /// The configured bound.
        max_depth: usize,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::ConflictingDefinition { shape_id } => {
                write!(f, "shape `{shape_id}` is defined by more than one schema")
            }
            RegistryError::MemberOutOfOrder { shape_id, member } => write!(
                f,
                "member `{member}` of `{shape_id}` is not at the position of its member index"
            ),
            RegistryError::DepthExceeded {
                shape_id,
                max_depth,
            } => write!(
                f,
                "shape `{shape_id}` is nested deeper than the limit of {max_depth}"
            ),
        }
    }
}

impl StdError for RegistryError {}

/// Lookup table from shape ID to schema for every shape reachable from a set of root shapes.
///
/// The registry is immutable once built. Shapes are kept in shape ID order so that iteration
/// is deterministic. Recursive shapes are visited once.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    shapes: BTreeMap<&'static str, &'static Schema>,
}

impl ShapeRegistry {
    /// Creates a builder for a registry.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the schema registered under `shape_id`.
    pub fn get(&self, shape_id: &str) -> Option<&'static Schema> {
        self.shapes.get(shape_id).copied()
    }

    /// Returns the ordered member descriptors of the structure registered under `shape_id`.
    pub fn members(&self, shape_id: &str) -> Option<&'static [&'static Schema]> {
        self.get(shape_id)
            .filter(|schema| schema.shape_type() == ShapeType::Structure)
            .map(|schema| schema.members())
    }

    /// Returns true if `shape_id` is registered.
    pub fn contains(&self, shape_id: &str) -> bool {
        self.shapes.contains_key(shape_id)
    }

    /// Returns the number of registered shapes, members included.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if no shapes are registered.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over the registered schemas in shape ID order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Schema> + '_ {
        self.shapes.values().copied()
    }
}

/// Builder for [`ShapeRegistry`].
#[derive(Debug)]
pub struct Builder {
    roots: Vec<&'static Schema>,
    max_depth: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Builder {
    /// Adds a shape whose closure should be registered.
    pub fn root(mut self, schema: &'static Schema) -> Self {
        self.roots.push(schema);
        self
    }

    /// Adds several root shapes.
    pub fn roots(mut self, schemas: impl IntoIterator<Item = &'static Schema>) -> Self {
        self.roots.extend(schemas);
        self
    }

    /// Sets how deep the walk from a root may go before it is rejected.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walks every root and builds the registry.
    pub fn build(self) -> Result<ShapeRegistry, RegistryError> {
        let mut shapes = BTreeMap::new();
        for root in &self.roots {
            visit(root, 0, self.max_depth, &mut shapes)?;
        }
        tracing::debug!(
            roots = self.roots.len(),
            shapes = shapes.len(),
            "built shape registry"
        );
        Ok(ShapeRegistry { shapes })
    }
}

fn visit(
    schema: &'static Schema,
    depth: usize,
    max_depth: usize,
    shapes: &mut BTreeMap<&'static str, &'static Schema>,
) -> Result<(), RegistryError> {
    let shape_id = schema.shape_id().as_str();
    if let Some(existing) = shapes.get(shape_id) {
        return if std::ptr::eq(*existing, schema) {
            Ok(())
        } else {
            Err(RegistryError::ConflictingDefinition { shape_id })
        };
    }
    if depth > max_depth {
        return Err(RegistryError::DepthExceeded {
            shape_id,
            max_depth,
        });
    }
    if schema.shape_type() == ShapeType::Structure {
        for (position, member) in schema.members().iter().enumerate() {
            if member.member_index() != Some(position) {
                return Err(RegistryError::MemberOutOfOrder {
                    shape_id,
                    member: member.member_name().unwrap_or_default(),
                });
            }
        }
    }
    shapes.insert(shape_id, schema);
    for referenced in schema.referenced() {
        visit(referenced, depth + 1, max_depth, shapes)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::RegistryError;
    use crate::prelude::{INTEGER, STRING};
    use crate::{Schema, ShapeId, ShapeRegistry};

    // Node -> Children (list) -> Node
    static NODE: Schema = Schema::structure(ShapeId::from_static("test#Node"), &NODE_MEMBERS);
    static NODE_MEMBERS: [&Schema; 2] = [&NODE_VALUE, &NODE_CHILDREN];
    static NODE_VALUE: Schema =
        Schema::member(ShapeId::from_static("test#Node$Value"), "Value", 0, &INTEGER);
    static NODE_CHILDREN: Schema = Schema::member(
        ShapeId::from_static("test#Node$Children"),
        "Children",
        1,
        &NODE_LIST,
    );
    static NODE_LIST: Schema = Schema::list(ShapeId::from_static("test#NodeList"), &NODE_LIST_MEMBER);
    static NODE_LIST_MEMBER: Schema = Schema::member(
        ShapeId::from_static("test#NodeList$member"),
        "member",
        0,
        &NODE,
    );

    static SHUFFLED: Schema = Schema::structure(ShapeId::from_static("test#Shuffled"), &SHUFFLED_MEMBERS);
    static SHUFFLED_MEMBERS: [&Schema; 1] = [&SHUFFLED_B];
    static SHUFFLED_B: Schema =
        Schema::member(ShapeId::from_static("test#Shuffled$B"), "B", 1, &STRING);

    static IMPOSTOR: Schema = Schema::simple(
        ShapeId::from_static("smithy.api#String"),
        crate::ShapeType::String,
    );

    #[test]
    fn recursive_shapes_are_registered_once() {
        let registry = ShapeRegistry::builder().root(&NODE).root(&NODE).build().unwrap();
        assert!(registry.contains("test#Node"));
        assert!(registry.contains("test#NodeList$member"));
        assert!(registry.contains("smithy.api#Integer"));
        assert_eq!(6, registry.len());
        let members: Vec<_> = registry
            .members("test#Node")
            .unwrap()
            .iter()
            .map(|member| member.member_name().unwrap())
            .collect();
        assert_eq!(vec!["Value", "Children"], members);
        assert!(registry.members("test#NodeList").is_none());
    }

    #[test]
    fn iteration_is_ordered_by_shape_id() {
        let registry = ShapeRegistry::builder().root(&NODE).build().unwrap();
        let ids: Vec<_> = registry.iter().map(|s| s.shape_id().as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn depth_bound() {
        assert_eq!(
            Err(RegistryError::DepthExceeded {
                shape_id: "smithy.api#Integer",
                max_depth: 1
            }),
            ShapeRegistry::builder()
                .root(&NODE)
                .max_depth(1)
                .build()
                .map(|_| ())
        );
    }

    #[test]
    fn member_order_is_validated() {
        let err = ShapeRegistry::builder()
            .root(&SHUFFLED)
            .build()
            .unwrap_err();
        assert_eq!(
            RegistryError::MemberOutOfOrder {
                shape_id: "test#Shuffled",
                member: "B"
            },
            err
        );
    }

    #[test]
    fn conflicting_definitions() {
        let err = ShapeRegistry::builder()
            .roots([&STRING, &IMPOSTOR])
            .build()
            .unwrap_err();
        assert_eq!(
            "shape `smithy.api#String` is defined by more than one schema",
            err.to_string()
        );
    }
}
