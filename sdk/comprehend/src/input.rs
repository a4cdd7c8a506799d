/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.
//!
//! Documents sent for analysis are sensitive: `Debug` output redacts them.

use std::fmt;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Default, PartialEq)]
pub struct DetectDominantLanguageInput {
    /// A UTF-8 text string. The string must contain at least 20 characters.
    pub text: Option<String>,
}

impl DetectDominantLanguageInput {
    /// Creates a new builder-style object to manufacture [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
    pub fn builder() -> crate::input::detect_dominant_language_input::Builder {
        crate::input::detect_dominant_language_input::Builder::default()
    }
}

impl fmt::Debug for DetectDominantLanguageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("DetectDominantLanguageInput");
        formatter.field("text", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}

/// See [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
pub mod detect_dominant_language_input {
    use std::fmt;

    /// A builder for [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
    #[non_exhaustive]
    #[derive(Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) text: Option<String>,
    }

    impl Builder {
        /// A UTF-8 text string. The string must contain at least 20 characters.
        pub fn text(mut self, input: impl Into<String>) -> Self {
            self.text = Some(input.into());
            self
        }
        /// A UTF-8 text string. The string must contain at least 20 characters.
        pub fn set_text(mut self, input: Option<String>) -> Self {
            self.text = input;
            self
        }
        /// Consumes the builder and constructs a [`DetectDominantLanguageInput`](crate::input::DetectDominantLanguageInput)
        pub fn build(self) -> crate::input::DetectDominantLanguageInput {
            crate::input::DetectDominantLanguageInput { text: self.text }
        }
    }

    impl fmt::Debug for Builder {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("text", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Default, PartialEq)]
pub struct BatchDetectDominantLanguageInput {
    /// A list containing the UTF-8 encoded text of the input documents.
    pub text_list: Option<Vec<String>>,
}

impl BatchDetectDominantLanguageInput {
    /// Creates a new builder-style object to manufacture [`BatchDetectDominantLanguageInput`](crate::input::BatchDetectDominantLanguageInput)
    pub fn builder() -> crate::input::batch_detect_dominant_language_input::Builder {
        crate::input::batch_detect_dominant_language_input::Builder::default()
    }
}

impl fmt::Debug for BatchDetectDominantLanguageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("BatchDetectDominantLanguageInput");
        formatter.field("text_list", &"*** Sensitive Data Redacted ***");
        formatter.finish()
    }
}

/// See [`BatchDetectDominantLanguageInput`](crate::input::BatchDetectDominantLanguageInput)
pub mod batch_detect_dominant_language_input {
    use std::fmt;

    /// A builder for [`BatchDetectDominantLanguageInput`](crate::input::BatchDetectDominantLanguageInput)
    #[non_exhaustive]
    #[derive(Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) text_list: Option<Vec<String>>,
    }

    impl Builder {
        /// Appends an item to `text_list`.
        pub fn text_list(mut self, input: impl Into<String>) -> Self {
            self.text_list
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }
        /// A list containing the UTF-8 encoded text of the input documents.
        pub fn set_text_list(mut self, input: Option<Vec<String>>) -> Self {
            self.text_list = input;
            self
        }
        /// Consumes the builder and constructs a [`BatchDetectDominantLanguageInput`](crate::input::BatchDetectDominantLanguageInput)
        pub fn build(self) -> crate::input::BatchDetectDominantLanguageInput {
            crate::input::BatchDetectDominantLanguageInput {
                text_list: self.text_list,
            }
        }
    }

    impl fmt::Debug for Builder {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut formatter = f.debug_struct("Builder");
            formatter.field("text_list", &"*** Sensitive Data Redacted ***");
            formatter.finish()
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BatchDetectDominantLanguageInput, DetectDominantLanguageInput};

    #[test]
    fn documents_are_redacted() {
        let input = DetectDominantLanguageInput::builder()
            .text("my secret diary entry")
            .build();
        assert_eq!(
            "DetectDominantLanguageInput { text: \"*** Sensitive Data Redacted ***\" }",
            format!("{:?}", input)
        );
        let batch = BatchDetectDominantLanguageInput::builder()
            .text_list("one")
            .text_list("two")
            .build();
        assert!(!format!("{:?}", batch).contains("one"));
        assert_eq!(Some(vec!["one".to_string(), "two".to_string()]), batch.text_list);
    }
}
