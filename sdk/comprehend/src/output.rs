/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{BatchDetectDominantLanguageItemResult, BatchItemError, DominantLanguage};

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectDominantLanguageOutput {
    /// The languages that the service detected in the input text, with their confidence scores.
    pub languages: Option<Vec<DominantLanguage>>,
}

impl DetectDominantLanguageOutput {
    /// Creates a new builder-style object to manufacture [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
    pub fn builder() -> crate::output::detect_dominant_language_output::Builder {
        crate::output::detect_dominant_language_output::Builder::default()
    }
}

/// See [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
pub mod detect_dominant_language_output {
    use crate::model::DominantLanguage;

    /// A builder for [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) languages: Option<Vec<DominantLanguage>>,
    }

    impl Builder {
        /// Appends an item to `languages`.
        pub fn languages(mut self, input: DominantLanguage) -> Self {
            self.languages.get_or_insert_with(Vec::new).push(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_languages(mut self, input: Option<Vec<DominantLanguage>>) -> Self {
            self.languages = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectDominantLanguageOutput`](crate::output::DetectDominantLanguageOutput)
        pub fn build(self) -> crate::output::DetectDominantLanguageOutput {
            crate::output::DetectDominantLanguageOutput {
                languages: self.languages,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchDetectDominantLanguageOutput {
    /// One result per document that was processed successfully.
    pub result_list: Option<Vec<BatchDetectDominantLanguageItemResult>>,
    /// One error per document that could not be processed.
    pub error_list: Option<Vec<BatchItemError>>,
}

impl BatchDetectDominantLanguageOutput {
    /// Creates a new builder-style object to manufacture [`BatchDetectDominantLanguageOutput`](crate::output::BatchDetectDominantLanguageOutput)
    pub fn builder() -> crate::output::batch_detect_dominant_language_output::Builder {
        crate::output::batch_detect_dominant_language_output::Builder::default()
    }
}

/// See [`BatchDetectDominantLanguageOutput`](crate::output::BatchDetectDominantLanguageOutput)
pub mod batch_detect_dominant_language_output {
    use crate::model::{BatchDetectDominantLanguageItemResult, BatchItemError};

    /// A builder for [`BatchDetectDominantLanguageOutput`](crate::output::BatchDetectDominantLanguageOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) result_list: Option<Vec<BatchDetectDominantLanguageItemResult>>,
        pub(crate) error_list: Option<Vec<BatchItemError>>,
    }

    impl Builder {
        /// Appends an item to `result_list`.
        pub fn result_list(mut self, input: BatchDetectDominantLanguageItemResult) -> Self {
            self.result_list.get_or_insert_with(Vec::new).push(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_result_list(
            mut self,
            input: Option<Vec<BatchDetectDominantLanguageItemResult>>,
        ) -> Self {
            self.result_list = input;
            self
        }
        /// Appends an item to `error_list`.
        pub fn error_list(mut self, input: BatchItemError) -> Self {
            self.error_list.get_or_insert_with(Vec::new).push(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_error_list(mut self, input: Option<Vec<BatchItemError>>) -> Self {
            self.error_list = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchDetectDominantLanguageOutput`](crate::output::BatchDetectDominantLanguageOutput)
        pub fn build(self) -> crate::output::BatchDetectDominantLanguageOutput {
            crate::output::BatchDetectDominantLanguageOutput {
                result_list: self.result_list,
                error_list: self.error_list,
            }
        }
    }
}
