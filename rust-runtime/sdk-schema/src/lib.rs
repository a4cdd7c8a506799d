/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime model descriptors for generated shapes.
//!
//! A [`Schema`] is a lightweight, `'static` description of a shape: its [`ShapeId`], its
//! [`ShapeType`], the wire name and location of each member, and the member ordering used when
//! serializing. Generated model crates declare one `static` schema per shape and implement
//! [`SerializableStruct`](serde::SerializableStruct) and
//! [`DeserializableStruct`](serde::DeserializableStruct) against them; the protocol codecs never
//! need per-shape state.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod registry;
mod shape_id;
mod shape_type;

pub mod codec;
pub mod prelude;
pub mod serde;

pub use registry::{RegistryError, ShapeRegistry};
pub use shape_id::ShapeId;
pub use shape_type::ShapeType;

use sdk_types::date_time::Format as TimestampFormat;

/// Where a member of a top-level input or output structure lives in an HTTP message.
///
/// Members of nested structures are always serialized into the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpBinding {
    /// The member is a key of the JSON document body.
    Body,
    /// The member substitutes a `{Name}` placeholder in the URI path.
    Label,
    /// The member substitutes a `{Name+}` placeholder in the URI path; `/` is left unencoded.
    GreedyLabel,
    /// The member is sent as the query parameter with this name.
    Query(&'static str),
    /// The member is sent as the header with this name.
    Header(&'static str),
    /// The member is the HTTP status code of the response.
    ResponseCode,
}

/// Static descriptor of a shape or of a member of an aggregate shape.
///
/// Member schemas reference the schema of the shape they target, so descriptors of recursive
/// shapes are ordinary `static` items that refer to each other.
#[derive(Debug)]
pub struct Schema {
    id: ShapeId,
    shape_type: ShapeType,
    member_name: Option<&'static str>,
    member_index: usize,
    target: Option<&'static Schema>,
    members: &'static [&'static Schema],
    element: Option<&'static Schema>,
    map_key: Option<&'static Schema>,
    json_name: Option<&'static str>,
    http_binding: HttpBinding,
    timestamp_format: Option<TimestampFormat>,
    enum_values: &'static [&'static str],
}

impl Schema {
    const fn base(id: ShapeId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            member_name: None,
            member_index: 0,
            target: None,
            members: &[],
            element: None,
            map_key: None,
            json_name: None,
            http_binding: HttpBinding::Body,
            timestamp_format: None,
            enum_values: &[],
        }
    }

    /// Creates the schema of a simple (non-aggregate) shape.
    pub const fn simple(id: ShapeId, shape_type: ShapeType) -> Self {
        Self::base(id, shape_type)
    }

    /// Creates the schema of a string enum shape with its allowed values.
    pub const fn enumeration(id: ShapeId, values: &'static [&'static str]) -> Self {
        let mut schema = Self::base(id, ShapeType::Enum);
        schema.enum_values = values;
        schema
    }

    /// Creates the schema of a structure. `members` must be in declaration order, and the
    /// member at position `i` must have been created with index `i`.
    ///
    /// The member array is usually its own `static` so that it can refer to member schemas
    /// declared next to it.
    pub const fn structure(id: ShapeId, members: &'static [&'static Schema]) -> Self {
        let mut schema = Self::base(id, ShapeType::Structure);
        schema.members = members;
        schema
    }

    /// Creates the schema of a list. `member` is the schema of the `member` member.
    pub const fn list(id: ShapeId, member: &'static Schema) -> Self {
        let mut schema = Self::base(id, ShapeType::List);
        schema.element = Some(member);
        schema
    }

    /// Creates the schema of a map from its `key` and `value` member schemas.
    pub const fn map(id: ShapeId, key: &'static Schema, value: &'static Schema) -> Self {
        let mut schema = Self::base(id, ShapeType::Map);
        schema.map_key = Some(key);
        schema.element = Some(value);
        schema
    }

    /// Creates a member schema named `name` at position `index` of its container,
    /// targeting `target`.
    pub const fn member(
        id: ShapeId,
        name: &'static str,
        index: usize,
        target: &'static Schema,
    ) -> Self {
        let mut schema = Self::base(id, ShapeType::Member);
        schema.member_name = Some(name);
        schema.member_index = index;
        schema.target = Some(target);
        schema
    }

    /// Sets the JSON key used for this member instead of its member name.
    pub const fn with_json_name(mut self, json_name: &'static str) -> Self {
        self.json_name = Some(json_name);
        self
    }

    /// Binds this member to a location of the HTTP message.
    pub const fn with_http_binding(mut self, binding: HttpBinding) -> Self {
        self.http_binding = binding;
        self
    }

    /// Overrides the wire format of a timestamp member or shape.
    pub const fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Returns the Shape ID of this schema.
    pub fn shape_id(&self) -> &ShapeId {
        &self.id
    }

    /// Returns the shape type. Member schemas return [`ShapeType::Member`].
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Returns the shape type of the targeted shape for members, or the shape type otherwise.
    pub fn target_type(&self) -> ShapeType {
        self.target().shape_type
    }

    /// Returns the targeted schema for members, or `self` otherwise.
    pub fn target(&self) -> &Schema {
        match self.target {
            Some(target) => target,
            None => self,
        }
    }

    /// Returns the member name if this is a member schema.
    pub fn member_name(&self) -> Option<&'static str> {
        self.member_name
    }

    /// Returns the position of this member in its container.
    pub fn member_index(&self) -> Option<usize> {
        self.member_name.map(|_| self.member_index)
    }

    /// Returns the key this member is written under in a JSON object.
    ///
    /// The `jsonName` override is only honoured when `use_json_name` is set.
    pub fn wire_name(&self, use_json_name: bool) -> &'static str {
        match (use_json_name, self.json_name, self.member_name) {
            (true, Some(json_name), _) => json_name,
            (_, _, Some(member_name)) => member_name,
            _ => "",
        }
    }

    /// Returns the member schemas of the targeted structure, in declaration order.
    pub fn members(&self) -> &'static [&'static Schema] {
        match self.target {
            Some(target) => target.members,
            None => self.members,
        }
    }

    /// Finds a member of the targeted structure by wire name.
    pub fn member_by_wire_name(
        &self,
        wire_name: &str,
        use_json_name: bool,
    ) -> Option<&'static Schema> {
        self.members()
            .iter()
            .copied()
            .find(|member| member.wire_name(use_json_name) == wire_name)
    }

    /// Returns the element schema of the targeted list.
    pub fn list_member(&self) -> Option<&'static Schema> {
        match self.target_type() {
            ShapeType::List => self.target().element,
            _ => None,
        }
    }

    /// Returns the key schema of the targeted map.
    pub fn map_key(&self) -> Option<&'static Schema> {
        self.target().map_key
    }

    /// Returns the value schema of the targeted map.
    pub fn map_value(&self) -> Option<&'static Schema> {
        match self.target_type() {
            ShapeType::Map => self.target().element,
            _ => None,
        }
    }

    /// Returns every schema this one refers to directly: structure members, the list member,
    /// the map key and value, and the target of a member.
    pub fn referenced(&self) -> impl Iterator<Item = &'static Schema> + '_ {
        self.members
            .iter()
            .copied()
            .chain(self.element)
            .chain(self.map_key)
            .chain(self.target)
    }

    /// Returns where this member is bound in an HTTP message.
    pub fn http_binding(&self) -> HttpBinding {
        self.http_binding
    }

    /// Returns the timestamp format declared on this member or on the shape it targets.
    pub fn timestamp_format(&self) -> Option<TimestampFormat> {
        self.timestamp_format.or(self.target().timestamp_format)
    }

    /// Returns the allowed values of the targeted enum shape.
    pub fn enum_values(&self) -> &'static [&'static str] {
        match self.target {
            Some(target) => target.enum_values,
            None => self.enum_values,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::{STRING, TIMESTAMP};
    use crate::{HttpBinding, Schema, ShapeId, ShapeType};
    use sdk_types::date_time::Format;

    static ITEM: Schema = Schema::structure(ShapeId::from_static("test#Item"), &ITEM_MEMBERS);
    static ITEM_MEMBERS: [&Schema; 3] = [&ITEM_NAME, &ITEM_CHILDREN, &ITEM_CREATED];
    static ITEM_NAME: Schema = Schema::member(ShapeId::from_static("test#Item$Name"), "Name", 0, &STRING)
        .with_json_name("name")
        .with_http_binding(HttpBinding::Label);
    static ITEM_CHILDREN: Schema = Schema::member(
        ShapeId::from_static("test#Item$Children"),
        "Children",
        1,
        &ITEM_LIST,
    );
    static ITEM_CREATED: Schema = Schema::member(
        ShapeId::from_static("test#Item$Created"),
        "Created",
        2,
        &TIMESTAMP,
    )
    .with_timestamp_format(Format::DateTime);
    static ITEM_LIST: Schema = Schema::list(ShapeId::from_static("test#ItemList"), &ITEM_LIST_MEMBER);
    static ITEM_LIST_MEMBER: Schema = Schema::member(
        ShapeId::from_static("test#ItemList$member"),
        "member",
        0,
        &ITEM,
    );

    #[test]
    fn recursive_descriptors() {
        assert_eq!(ShapeType::Structure, ITEM.shape_type());
        let children = ITEM.member_by_wire_name("Children", true).unwrap();
        let element = children.list_member().unwrap();
        assert_eq!("test#Item", element.target().shape_id().as_str());
        assert_eq!(3, element.members().len());
    }

    #[test]
    fn wire_names() {
        assert_eq!("name", ITEM_NAME.wire_name(true));
        assert_eq!("Name", ITEM_NAME.wire_name(false));
        assert!(ITEM.member_by_wire_name("Name", true).is_none());
        assert_eq!(
            Some(1),
            ITEM.member_by_wire_name("Children", false)
                .and_then(|member| member.member_index())
        );
    }

    #[test]
    fn member_traits() {
        assert_eq!(HttpBinding::Label, ITEM_NAME.http_binding());
        assert_eq!(HttpBinding::Body, ITEM_CHILDREN.http_binding());
        assert_eq!(Some(Format::DateTime), ITEM_CREATED.timestamp_format());
        assert_eq!(None, TIMESTAMP.timestamp_format());
        assert_eq!(ShapeType::Timestamp, ITEM_CREATED.target_type());
        assert_eq!(None, ITEM.member_index());
    }
}
