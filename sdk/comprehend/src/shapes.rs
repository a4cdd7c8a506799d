/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptors of every shape of the service.

use sdk_schema::prelude::{FLOAT, INTEGER, STRING};
use sdk_schema::{RegistryError, Schema, ShapeId, ShapeRegistry};
use std::sync::LazyLock;

macro_rules! id {
    ($name:literal) => {
        ShapeId::from_static(concat!("com.amazonaws.comprehend#", $name))
    };
}

pub(crate) static INVALID_REQUEST_REASON: Schema =
    Schema::enumeration(id!("InvalidRequestReason"), &["INVALID_DOCUMENT"]);

// DominantLanguage

pub(crate) static DOMINANT_LANGUAGE: Schema =
    Schema::structure(id!("DominantLanguage"), &DOMINANT_LANGUAGE_MEMBERS);
static DOMINANT_LANGUAGE_MEMBERS: [&Schema; 2] =
    [&DOMINANT_LANGUAGE_LANGUAGE_CODE, &DOMINANT_LANGUAGE_SCORE];
pub(crate) static DOMINANT_LANGUAGE_LANGUAGE_CODE: Schema = Schema::member(
    id!("DominantLanguage$LanguageCode"),
    "LanguageCode",
    0,
    &STRING,
);
pub(crate) static DOMINANT_LANGUAGE_SCORE: Schema =
    Schema::member(id!("DominantLanguage$Score"), "Score", 1, &FLOAT);

pub(crate) static LIST_OF_DOMINANT_LANGUAGES: Schema = Schema::list(
    id!("ListOfDominantLanguages"),
    &LIST_OF_DOMINANT_LANGUAGES_MEMBER,
);
pub(crate) static LIST_OF_DOMINANT_LANGUAGES_MEMBER: Schema = Schema::member(
    id!("ListOfDominantLanguages$member"),
    "member",
    0,
    &DOMINANT_LANGUAGE,
);

// BatchDetectDominantLanguageItemResult

pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT: Schema = Schema::structure(
    id!("BatchDetectDominantLanguageItemResult"),
    &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_MEMBERS,
);
static BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_MEMBERS: [&Schema; 2] = [
    &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_INDEX,
    &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_LANGUAGES,
];
pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_INDEX: Schema = Schema::member(
    id!("BatchDetectDominantLanguageItemResult$Index"),
    "Index",
    0,
    &INTEGER,
);
pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT_LANGUAGES: Schema = Schema::member(
    id!("BatchDetectDominantLanguageItemResult$Languages"),
    "Languages",
    1,
    &LIST_OF_DOMINANT_LANGUAGES,
);

pub(crate) static LIST_OF_DETECT_DOMINANT_LANGUAGE_RESULT: Schema = Schema::list(
    id!("ListOfDetectDominantLanguageResult"),
    &LIST_OF_DETECT_DOMINANT_LANGUAGE_RESULT_MEMBER,
);
pub(crate) static LIST_OF_DETECT_DOMINANT_LANGUAGE_RESULT_MEMBER: Schema = Schema::member(
    id!("ListOfDetectDominantLanguageResult$member"),
    "member",
    0,
    &BATCH_DETECT_DOMINANT_LANGUAGE_ITEM_RESULT,
);

// BatchItemError

pub(crate) static BATCH_ITEM_ERROR: Schema =
    Schema::structure(id!("BatchItemError"), &BATCH_ITEM_ERROR_MEMBERS);
static BATCH_ITEM_ERROR_MEMBERS: [&Schema; 3] = [
    &BATCH_ITEM_ERROR_INDEX,
    &BATCH_ITEM_ERROR_ERROR_CODE,
    &BATCH_ITEM_ERROR_ERROR_MESSAGE,
];
pub(crate) static BATCH_ITEM_ERROR_INDEX: Schema =
    Schema::member(id!("BatchItemError$Index"), "Index", 0, &INTEGER);
pub(crate) static BATCH_ITEM_ERROR_ERROR_CODE: Schema =
    Schema::member(id!("BatchItemError$ErrorCode"), "ErrorCode", 1, &STRING);
pub(crate) static BATCH_ITEM_ERROR_ERROR_MESSAGE: Schema = Schema::member(
    id!("BatchItemError$ErrorMessage"),
    "ErrorMessage",
    2,
    &STRING,
);

pub(crate) static BATCH_ITEM_ERROR_LIST: Schema =
    Schema::list(id!("BatchItemErrorList"), &BATCH_ITEM_ERROR_LIST_MEMBER);
pub(crate) static BATCH_ITEM_ERROR_LIST_MEMBER: Schema = Schema::member(
    id!("BatchItemErrorList$member"),
    "member",
    0,
    &BATCH_ITEM_ERROR,
);

// DetectDominantLanguage

pub(crate) static DETECT_DOMINANT_LANGUAGE_INPUT: Schema = Schema::structure(
    id!("DetectDominantLanguageRequest"),
    &DETECT_DOMINANT_LANGUAGE_INPUT_MEMBERS,
);
static DETECT_DOMINANT_LANGUAGE_INPUT_MEMBERS: [&Schema; 1] = [&DETECT_DOMINANT_LANGUAGE_INPUT_TEXT];
pub(crate) static DETECT_DOMINANT_LANGUAGE_INPUT_TEXT: Schema = Schema::member(
    id!("DetectDominantLanguageRequest$Text"),
    "Text",
    0,
    &STRING,
);

pub(crate) static DETECT_DOMINANT_LANGUAGE_OUTPUT: Schema = Schema::structure(
    id!("DetectDominantLanguageResponse"),
    &DETECT_DOMINANT_LANGUAGE_OUTPUT_MEMBERS,
);
static DETECT_DOMINANT_LANGUAGE_OUTPUT_MEMBERS: [&Schema; 1] =
    [&DETECT_DOMINANT_LANGUAGE_OUTPUT_LANGUAGES];
pub(crate) static DETECT_DOMINANT_LANGUAGE_OUTPUT_LANGUAGES: Schema = Schema::member(
    id!("DetectDominantLanguageResponse$Languages"),
    "Languages",
    0,
    &LIST_OF_DOMINANT_LANGUAGES,
);

// BatchDetectDominantLanguage

pub(crate) static CUSTOMER_INPUT_STRING_LIST: Schema = Schema::list(
    id!("CustomerInputStringList"),
    &CUSTOMER_INPUT_STRING_LIST_MEMBER,
);
pub(crate) static CUSTOMER_INPUT_STRING_LIST_MEMBER: Schema = Schema::member(
    id!("CustomerInputStringList$member"),
    "member",
    0,
    &STRING,
);

pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_INPUT: Schema = Schema::structure(
    id!("BatchDetectDominantLanguageRequest"),
    &BATCH_DETECT_DOMINANT_LANGUAGE_INPUT_MEMBERS,
);
static BATCH_DETECT_DOMINANT_LANGUAGE_INPUT_MEMBERS: [&Schema; 1] =
    [&BATCH_DETECT_DOMINANT_LANGUAGE_INPUT_TEXT_LIST];
pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_INPUT_TEXT_LIST: Schema = Schema::member(
    id!("BatchDetectDominantLanguageRequest$TextList"),
    "TextList",
    0,
    &CUSTOMER_INPUT_STRING_LIST,
);

pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT: Schema = Schema::structure(
    id!("BatchDetectDominantLanguageResponse"),
    &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_MEMBERS,
);
static BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_MEMBERS: [&Schema; 2] = [
    &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_RESULT_LIST,
    &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_ERROR_LIST,
];
pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_RESULT_LIST: Schema = Schema::member(
    id!("BatchDetectDominantLanguageResponse$ResultList"),
    "ResultList",
    0,
    &LIST_OF_DETECT_DOMINANT_LANGUAGE_RESULT,
);
pub(crate) static BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT_ERROR_LIST: Schema = Schema::member(
    id!("BatchDetectDominantLanguageResponse$ErrorList"),
    "ErrorList",
    1,
    &BATCH_ITEM_ERROR_LIST,
);

// errors

pub(crate) static INVALID_REQUEST_EXCEPTION: Schema = Schema::structure(
    id!("InvalidRequestException"),
    &INVALID_REQUEST_EXCEPTION_MEMBERS,
);
static INVALID_REQUEST_EXCEPTION_MEMBERS: [&Schema; 2] = [
    &INVALID_REQUEST_EXCEPTION_MESSAGE,
    &INVALID_REQUEST_EXCEPTION_REASON,
];
pub(crate) static INVALID_REQUEST_EXCEPTION_MESSAGE: Schema = Schema::member(
    id!("InvalidRequestException$Message"),
    "Message",
    0,
    &STRING,
);
pub(crate) static INVALID_REQUEST_EXCEPTION_REASON: Schema = Schema::member(
    id!("InvalidRequestException$Reason"),
    "Reason",
    1,
    &INVALID_REQUEST_REASON,
);

macro_rules! exception_schema {
    ($schema:ident, $members:ident, $message:ident, $name:literal) => {
        pub(crate) static $schema: Schema = Schema::structure(id!($name), &$members);
        static $members: [&Schema; 1] = [&$message];
        pub(crate) static $message: Schema = Schema::member(
            ShapeId::from_static(concat!("com.amazonaws.comprehend#", $name, "$Message")),
            "Message",
            0,
            &STRING,
        );
    };
}

exception_schema!(
    TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION_MEMBERS,
    TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION_MESSAGE,
    "TextSizeLimitExceededException"
);
exception_schema!(
    BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION_MEMBERS,
    BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION_MESSAGE,
    "BatchSizeLimitExceededException"
);
exception_schema!(
    INTERNAL_SERVER_EXCEPTION,
    INTERNAL_SERVER_EXCEPTION_MEMBERS,
    INTERNAL_SERVER_EXCEPTION_MESSAGE,
    "InternalServerException"
);

static ROOTS: [&Schema; 8] = [
    &DETECT_DOMINANT_LANGUAGE_INPUT,
    &DETECT_DOMINANT_LANGUAGE_OUTPUT,
    &BATCH_DETECT_DOMINANT_LANGUAGE_INPUT,
    &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT,
    &INVALID_REQUEST_EXCEPTION,
    &TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    &BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    &INTERNAL_SERVER_EXCEPTION,
];

static REGISTRY: LazyLock<Result<ShapeRegistry, RegistryError>> =
    LazyLock::new(|| ShapeRegistry::builder().roots(ROOTS).build());

/// Every shape of the service, keyed by shape ID.
pub fn shape_registry() -> Result<&'static ShapeRegistry, RegistryError> {
    LazyLock::force(&REGISTRY).as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod test {
    use super::shape_registry;

    #[test]
    fn registry_builds() {
        let registry = shape_registry().expect("descriptors are consistent");
        assert!(registry.contains("com.amazonaws.comprehend#DominantLanguage$Score"));
        assert!(registry.contains("com.amazonaws.comprehend#InvalidRequestReason"));
        assert!(registry.contains("smithy.api#Float"));
        let members = registry
            .members("com.amazonaws.comprehend#BatchItemError")
            .unwrap();
        assert_eq!(3, members.len());
    }
}
