/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptions of the operations of the service.
//!
//! Every operation is sent as `POST /` and named by the `X-Amz-Target` header.

use crate::shapes::*;
use sdk_http::operation::OperationSchema;

const SERVICE: &str = "Comprehend";

/// Determines the dominant language of the input text.
pub static DETECT_DOMINANT_LANGUAGE: OperationSchema = OperationSchema::new(
    SERVICE,
    "DetectDominantLanguage",
    &DETECT_DOMINANT_LANGUAGE_INPUT,
    &DETECT_DOMINANT_LANGUAGE_OUTPUT,
);

/// Determines the dominant language of the input text for a batch of documents.
pub static BATCH_DETECT_DOMINANT_LANGUAGE: OperationSchema = OperationSchema::new(
    SERVICE,
    "BatchDetectDominantLanguage",
    &BATCH_DETECT_DOMINANT_LANGUAGE_INPUT,
    &BATCH_DETECT_DOMINANT_LANGUAGE_OUTPUT,
);
