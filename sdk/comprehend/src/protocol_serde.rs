/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{
    BatchSizeLimitExceededException, InternalServerException, InvalidRequestException,
    TextSizeLimitExceededException,
};
use crate::input::{BatchDetectDominantLanguageInput, DetectDominantLanguageInput};
use crate::model::{BatchDetectDominantLanguageItemResult, BatchItemError, DominantLanguage};
use crate::output::{BatchDetectDominantLanguageOutput, DetectDominantLanguageOutput};
use crate::shapes::*;
use sdk_schema::serde::{
    DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
};
use sdk_schema::Schema;

fn read_dominant_languages<D: ShapeDeserializer>(
    de: &mut D,
    member: &Schema,
) -> Result<Vec<DominantLanguage>, D::Error> {
    de.read_list(member, Vec::new(), |mut languages, de| {
        if let Some(language) = de.read_optional_struct()? {
            languages.push(language);
        }
        Ok(languages)
    })
}

// model

impl DeserializableStruct for DominantLanguage {
    fn schema() -> &'static Schema {
        &DOMINANT_LANGUAGE
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &DOMINANT_LANGUAGE,
            DominantLanguage::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.language_code(de.read_string(member)?),
                    Some(1) => builder.score(de.read_float(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for BatchDetectDominantLanguageItemResult {
    fn schema() -> &'static Schema {
        &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT,
            BatchDetectDominantLanguageItemResult::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.index(de.read_integer(member)?),
                    Some(1) => builder.set_languages(Some(read_dominant_languages(de, member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for BatchItemError {
    fn schema() -> &'static Schema {
        &BATCH_ITEM_ERROR
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &BATCH_ITEM_ERROR,
            BatchItemError::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.index(de.read_integer(member)?),
                    Some(1) => builder.error_code(de.read_string(member)?),
                    Some(2) => builder.error_message(de.read_string(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

// inputs

impl SerializableStruct for DetectDominantLanguageInput {
    fn schema() -> &'static Schema {
        &DETECT_DOMINANT_LANGUAGE_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.text {
            ser.write_string(&DETECT_DOMINANT_LANGUAGE_INPUT_TEXT, var)?;
        }
        Ok(())
    }
}

impl SerializableStruct for BatchDetectDominantLanguageInput {
    fn schema() -> &'static Schema {
        &BATCH_DETECT_DOMINANT_LANGUAGE_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.text_list {
            ser.write_list(&BATCH_DETECT_DOMINANT_LANGUAGE_INPUT_TEXT_LIST, |ser| {
                for item in var {
                    ser.write_string(&CUSTOMER_INPUT_STRING_LIST_MEMBER, item)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }
}

// outputs

impl DeserializableStruct for DetectDominantLanguageOutput {
    fn schema() -> &'static Schema {
        &DETECT_DOMINANT_LANGUAGE_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &DETECT_DOMINANT_LANGUAGE_OUTPUT,
            DetectDominantLanguageOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_languages(Some(read_dominant_languages(de, member)?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for BatchDetectDominantLanguageOutput {
    fn schema() -> &'static Schema {
        &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT,
            BatchDetectDominantLanguageOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_result_list(Some(de.read_list(
                        member,
                        Vec::new(),
                        |mut results, de| {
                            if let Some(result) = de.read_optional_struct()? {
                                results.push(result);
                            }
                            Ok(results)
                        },
                    )?)),
                    Some(1) => builder.set_error_list(Some(de.read_list(
                        member,
                        Vec::new(),
                        |mut errors, de| {
                            if let Some(error) = de.read_optional_struct()? {
                                errors.push(error);
                            }
                            Ok(errors)
                        },
                    )?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

// errors

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

deserialize_exception!(TextSizeLimitExceededException, TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION);
deserialize_exception!(BatchSizeLimitExceededException, BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION);
deserialize_exception!(InternalServerException, INTERNAL_SERVER_EXCEPTION);

impl DeserializableStruct for InvalidRequestException {
    fn schema() -> &'static Schema {
        &INVALID_REQUEST_EXCEPTION
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        de.read_struct(
            &INVALID_REQUEST_EXCEPTION,
            InvalidRequestException::default(),
            |mut err, member, de| {
                match member.member_index() {
                    Some(0) => err.message = Some(de.read_string(member)?),
                    Some(1) => err.reason = Some(de.read_enum(member)?),
                    _ => {}
                }
                Ok(err)
            },
        )
    }
}
