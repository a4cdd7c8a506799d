/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{
    InternalServiceException, InvalidParameterException, InvalidRequestException,
    ResourceNotFoundException, ThrottlingException,
};
use crate::input::{DescribeContactFlowInput, UpdateContactFlowMetadataInput};
use crate::model::ContactFlow;
use crate::output::{DescribeContactFlowOutput, UpdateContactFlowMetadataOutput};
use crate::shapes::*;
use sdk_schema::serde::{
    DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
};
use sdk_schema::Schema;

impl DeserializableStruct for ContactFlow {
    fn schema() -> &'static Schema {
        &CONTACT_FLOW
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(&CONTACT_FLOW, ContactFlow::builder(), |builder, member, de| {
            Ok(match member.member_index() {
                Some(0) => builder.arn(de.read_string(member)?),
                Some(1) => builder.id(de.read_string(member)?),
                Some(2) => builder.name(de.read_string(member)?),
                Some(3) => builder.state(de.read_enum(member)?),
                Some(4) => builder.description(de.read_string(member)?),
                Some(5) => builder.content(de.read_string(member)?),
                _ => builder,
            })
        })?;
        Ok(builder.build())
    }
}

impl SerializableStruct for UpdateContactFlowMetadataInput {
    fn schema() -> &'static Schema {
        &UPDATE_CONTACT_FLOW_METADATA_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.instance_id {
            ser.write_string(&UPDATE_CONTACT_FLOW_METADATA_INPUT_INSTANCE_ID, var)?;
        }
        if let Some(var) = &self.contact_flow_id {
            ser.write_string(&UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_ID, var)?;
        }
        if let Some(var) = &self.name {
            ser.write_string(&UPDATE_CONTACT_FLOW_METADATA_INPUT_NAME, var)?;
        }
        if let Some(var) = &self.description {
            ser.write_string(&UPDATE_CONTACT_FLOW_METADATA_INPUT_DESCRIPTION, var)?;
        }
        if let Some(var) = &self.contact_flow_state {
            ser.write_string(
                &UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_STATE,
                var.as_str(),
            )?;
        }
        Ok(())
    }
}

impl SerializableStruct for DescribeContactFlowInput {
    fn schema() -> &'static Schema {
        &DESCRIBE_CONTACT_FLOW_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.instance_id {
            ser.write_string(&DESCRIBE_CONTACT_FLOW_INPUT_INSTANCE_ID, var)?;
        }
        if let Some(var) = &self.contact_flow_id {
            ser.write_string(&DESCRIBE_CONTACT_FLOW_INPUT_CONTACT_FLOW_ID, var)?;
        }
        Ok(())
    }
}

impl DeserializableStruct for UpdateContactFlowMetadataOutput {
    fn schema() -> &'static Schema {
        &UPDATE_CONTACT_FLOW_METADATA_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &UPDATE_CONTACT_FLOW_METADATA_OUTPUT,
            UpdateContactFlowMetadataOutput::builder(),
            |builder, _member, _de| Ok(builder),
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for DescribeContactFlowOutput {
    fn schema() -> &'static Schema {
        &DESCRIBE_CONTACT_FLOW_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &DESCRIBE_CONTACT_FLOW_OUTPUT,
            DescribeContactFlowOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_contact_flow(de.read_optional_struct()?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

macro_rules! deserialize_exception {
    ($ty:ident, $schema:ident) => {
        impl DeserializableStruct for $ty {
            fn schema() -> &'static Schema {
                &$schema
            }

            fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
                de.read_struct(&$schema, $ty::default(), |mut err, member, de| {
                    if member.member_index() == Some(0) {
                        err.message = Some(de.read_string(member)?);
                    }
                    Ok(err)
                })
            }
        }
    };
}

deserialize_exception!(InternalServiceException, INTERNAL_SERVICE_EXCEPTION);
deserialize_exception!(InvalidParameterException, INVALID_PARAMETER_EXCEPTION);
deserialize_exception!(InvalidRequestException, INVALID_REQUEST_EXCEPTION);
deserialize_exception!(ResourceNotFoundException, RESOURCE_NOT_FOUND_EXCEPTION);
deserialize_exception!(ThrottlingException, THROTTLING_EXCEPTION);

#[cfg(test)]
mod test {
    use crate::input::UpdateContactFlowMetadataInput;
    use crate::model::{ContactFlow, ContactFlowState};
    use sdk_json::codec::{JsonCodecSettings, JsonDeserializer, JsonSerializer};
    use sdk_schema::serde::{DeserializableStruct, SerializableStruct, ShapeSerializer};

    #[test]
    fn state_is_written_as_its_wire_value() {
        let input = UpdateContactFlowMetadataInput::builder()
            .name("Inbound")
            .contact_flow_state(ContactFlowState::Archived)
            .build();
        let mut ser = JsonSerializer::new(JsonCodecSettings::rest_json());
        input.serialize(&mut ser).unwrap();
        let json = String::from_utf8(ser.finish().unwrap()).unwrap();
        assert_eq!(r#"{"Name":"Inbound","ContactFlowState":"ARCHIVED"}"#, json);
    }

    #[test]
    fn contact_flow_keeps_unknown_states() {
        let json = br#"{"Id":"cf-1","State":"DRAFT","Tags":{"team":"support"}}"#;
        let mut de = JsonDeserializer::new(json, JsonCodecSettings::rest_json());
        let flow = ContactFlow::deserialize(&mut de).unwrap();
        assert_eq!(Some("cf-1"), flow.id.as_deref());
        assert_eq!(Some("DRAFT"), flow.state.as_ref().map(|s| s.as_str()));
    }
}
