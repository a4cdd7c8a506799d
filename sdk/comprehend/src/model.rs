/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types shared by the inputs, outputs and errors of the service.

use crate::shapes;
use sdk_types::{UnknownVariantError, UnknownVariantValue};
use std::str::FromStr;

/// Why a request was rejected as invalid.
///
/// Values added to the service after this client was built are kept in the `Unknown`
/// variant. Use [`FromStr`] to reject them instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvalidRequestReason {
    #[allow(missing_docs)]
    InvalidDocument,
    /// A value this client doesn't know.
    Unknown(UnknownVariantValue),
}

impl InvalidRequestReason {
    /// Returns the wire value of this variant.
    pub fn as_str(&self) -> &str {
        match self {
            InvalidRequestReason::InvalidDocument => "INVALID_DOCUMENT",
            InvalidRequestReason::Unknown(value) => value.as_str(),
        }
    }

    /// Returns every wire value of the enum.
    pub fn values() -> &'static [&'static str] {
        shapes::INVALID_REQUEST_REASON.enum_values()
    }
}

impl From<&str> for InvalidRequestReason {
    fn from(s: &str) -> Self {
        match s {
            "INVALID_DOCUMENT" => InvalidRequestReason::InvalidDocument,
            other => InvalidRequestReason::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for InvalidRequestReason {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match InvalidRequestReason::from(s) {
            InvalidRequestReason::Unknown(value) => Err(UnknownVariantError::new(
                "InvalidRequestReason",
                value.as_str(),
                Self::values(),
            )),
            known => Ok(known),
        }
    }
}

impl AsRef<str> for InvalidRequestReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A language the service detected and how confident it is.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DominantLanguage {
    /// The RFC 5646 language code of the dominant language.
    pub language_code: Option<String>,
    /// The level of confidence that Amazon Comprehend has in the accuracy of the detection.
    pub score: Option<f32>,
}

impl DominantLanguage {
    /// Creates a new builder-style object to manufacture [`DominantLanguage`](crate::model::DominantLanguage)
    pub fn builder() -> crate::model::dominant_language::Builder {
        crate::model::dominant_language::Builder::default()
    }
}

/// See [`DominantLanguage`](crate::model::DominantLanguage)
pub mod dominant_language {
    /// A builder for [`DominantLanguage`](crate::model::DominantLanguage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) language_code: Option<String>,
        pub(crate) score: Option<f32>,
    }

    impl Builder {
        /// The RFC 5646 language code of the dominant language.
        pub fn language_code(mut self, input: impl Into<String>) -> Self {
            self.language_code = Some(input.into());
            self
        }
        /// The RFC 5646 language code of the dominant language.
        pub fn set_language_code(mut self, input: Option<String>) -> Self {
            self.language_code = input;
            self
        }
        /// The level of confidence that Amazon Comprehend has in the accuracy of the detection.
        pub fn score(mut self, input: f32) -> Self {
            self.score = Some(input);
            self
        }
        /// The level of confidence that Amazon Comprehend has in the accuracy of the detection.
        pub fn set_score(mut self, input: Option<f32>) -> Self {
            self.score = input;
            self
        }
        /// Consumes the builder and constructs a [`DominantLanguage`](crate::model::DominantLanguage)
        pub fn build(self) -> crate::model::DominantLanguage {
            crate::model::DominantLanguage {
                language_code: self.language_code,
                score: self.score,
            }
        }
    }
}

/// The result of detecting the dominant language of one document of a batch.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDetectDominantLanguageItemResult {
    /// The zero-based index of the document in the input list.
    pub index: Option<i32>,
    /// One or more languages that the service detected in the document.
    pub languages: Option<Vec<DominantLanguage>>,
}

impl BatchDetectDominantLanguageItemResult {
    /// Creates a new builder-style object to manufacture [`BatchDetectDominantLanguageItemResult`](crate::model::BatchDetectDominantLanguageItemResult)
    pub fn builder() -> crate::model::batch_detect_dominant_language_item_result::Builder {
        crate::model::batch_detect_dominant_language_item_result::Builder::default()
    }
}

/// See [`BatchDetectDominantLanguageItemResult`](crate::model::BatchDetectDominantLanguageItemResult)
pub mod batch_detect_dominant_language_item_result {
    use crate::model::DominantLanguage;

    /// A builder for [`BatchDetectDominantLanguageItemResult`](crate::model::BatchDetectDominantLanguageItemResult)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) index: Option<i32>,
        pub(crate) languages: Option<Vec<DominantLanguage>>,
    }

    impl Builder {
        /// The zero-based index of the document in the input list.
        pub fn index(mut self, input: i32) -> Self {
            self.index = Some(input);
            self
        }
        /// The zero-based index of the document in the input list.
        pub fn set_index(mut self, input: Option<i32>) -> Self {
            self.index = input;
            self
        }
        /// Appends an item to `languages`.
        pub fn languages(mut self, input: DominantLanguage) -> Self {
            self.languages.get_or_insert_with(Vec::new).push(input);
            self
        }
        /// One or more languages that the service detected in the document.
        pub fn set_languages(mut self, input: Option<Vec<DominantLanguage>>) -> Self {
            self.languages = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchDetectDominantLanguageItemResult`](crate::model::BatchDetectDominantLanguageItemResult)
        pub fn build(self) -> crate::model::BatchDetectDominantLanguageItemResult {
            crate::model::BatchDetectDominantLanguageItemResult {
                index: self.index,
                languages: self.languages,
            }
        }
    }
}

/// Describes an error that occurred while processing one document of a batch.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchItemError {
    /// The zero-based index of the document in the input list.
    pub index: Option<i32>,
    /// The numeric error code of the error.
    pub error_code: Option<String>,
    /// A text description of the error.
    pub error_message: Option<String>,
}

impl BatchItemError {
    /// Creates a new builder-style object to manufacture [`BatchItemError`](crate::model::BatchItemError)
    pub fn builder() -> crate::model::batch_item_error::Builder {
        crate::model::batch_item_error::Builder::default()
    }
}

/// See [`BatchItemError`](crate::model::BatchItemError)
pub mod batch_item_error {
    /// A builder for [`BatchItemError`](crate::model::BatchItemError)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) index: Option<i32>,
        pub(crate) error_code: Option<String>,
        pub(crate) error_message: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn index(mut self, input: i32) -> Self {
            self.index = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_index(mut self, input: Option<i32>) -> Self {
            self.index = input;
            self
        }
        #[allow(missing_docs)]
        pub fn error_code(mut self, input: impl Into<String>) -> Self {
            self.error_code = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_error_code(mut self, input: Option<String>) -> Self {
            self.error_code = input;
            self
        }
        #[allow(missing_docs)]
        pub fn error_message(mut self, input: impl Into<String>) -> Self {
            self.error_message = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_error_message(mut self, input: Option<String>) -> Self {
            self.error_message = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchItemError`](crate::model::BatchItemError)
        pub fn build(self) -> crate::model::BatchItemError {
            crate::model::BatchItemError {
                index: self.index,
                error_code: self.error_code,
                error_message: self.error_message,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::InvalidRequestReason;

    #[test]
    fn invalid_request_reason() {
        assert_eq!(
            InvalidRequestReason::InvalidDocument,
            InvalidRequestReason::from("INVALID_DOCUMENT")
        );
        assert_eq!("TOO_LONG", InvalidRequestReason::from("TOO_LONG").as_str());
        let err = "TOO_LONG".parse::<InvalidRequestReason>().unwrap_err();
        assert_eq!(
            "invalid enum value `TOO_LONG` for InvalidRequestReason; expected one of: INVALID_DOCUMENT",
            err.to_string()
        );
    }
}
