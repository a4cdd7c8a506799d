/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types shared by the inputs and outputs of the service.

use crate::shapes;
use sdk_types::{UnknownVariantError, UnknownVariantValue};
use std::fmt;
use std::str::FromStr;

/// Whether a contact flow is in use.
///
/// Unmarshalling never fails on a state this client doesn't know: the value is kept in
/// [`ContactFlowState::Unknown`]. Parsing with [`FromStr`] rejects it.
///
/// ```
/// use sdk_connect::model::ContactFlowState;
///
/// assert_eq!(Ok(ContactFlowState::Archived), "ARCHIVED".parse());
/// assert!("DELETED".parse::<ContactFlowState>().is_err());
/// assert_eq!("DELETED", ContactFlowState::from("DELETED").as_str());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactFlowState {
    #[allow(missing_docs)]
    Active,
    #[allow(missing_docs)]
    Archived,
    /// A value this client doesn't know.
    Unknown(UnknownVariantValue),
}

impl ContactFlowState {
    /// Returns the wire value of this variant.
    pub fn as_str(&self) -> &str {
        match self {
            ContactFlowState::Active => "ACTIVE",
            ContactFlowState::Archived => "ARCHIVED",
            ContactFlowState::Unknown(value) => value.as_str(),
        }
    }

    /// Returns every wire value of the enum.
    pub fn values() -> &'static [&'static str] {
        shapes::CONTACT_FLOW_STATE.enum_values()
    }
}

impl From<&str> for ContactFlowState {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => ContactFlowState::Active,
            "ARCHIVED" => ContactFlowState::Archived,
            other => ContactFlowState::Unknown(UnknownVariantValue::new(other)),
        }
    }
}

impl FromStr for ContactFlowState {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ContactFlowState::from(s) {
            ContactFlowState::Unknown(value) => Err(UnknownVariantError::new(
                "ContactFlowState",
                value.as_str(),
                Self::values(),
            )),
            known => Ok(known),
        }
    }
}

impl AsRef<str> for ContactFlowState {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContactFlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contains information about a contact flow.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFlow {
    /// The Amazon Resource Name (ARN) of the contact flow.
    pub arn: Option<String>,
    /// The identifier of the contact flow.
    pub id: Option<String>,
    /// The name of the contact flow.
    pub name: Option<String>,
    /// The state of the contact flow.
    pub state: Option<ContactFlowState>,
    /// The description of the contact flow.
    pub description: Option<String>,
    /// The content of the contact flow, in the Amazon Connect Flow language.
    pub content: Option<String>,
}

impl ContactFlow {
    /// Creates a new builder-style object to manufacture [`ContactFlow`](crate::model::ContactFlow)
    pub fn builder() -> crate::model::contact_flow::Builder {
        crate::model::contact_flow::Builder::default()
    }
}

/// See [`ContactFlow`](crate::model::ContactFlow)
pub mod contact_flow {
    use crate::model::ContactFlowState;

    /// A builder for [`ContactFlow`](crate::model::ContactFlow)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) arn: Option<String>,
        pub(crate) id: Option<String>,
        pub(crate) name: Option<String>,
        pub(crate) state: Option<ContactFlowState>,
        pub(crate) description: Option<String>,
        pub(crate) content: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn arn(mut self, input: impl Into<String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_arn(mut self, input: Option<String>) -> Self {
            self.arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn id(mut self, input: impl Into<String>) -> Self {
            self.id = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_id(mut self, input: Option<String>) -> Self {
            self.id = input;
            self
        }
        #[allow(missing_docs)]
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        #[allow(missing_docs)]
        pub fn state(mut self, input: ContactFlowState) -> Self {
            self.state = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_state(mut self, input: Option<ContactFlowState>) -> Self {
            self.state = input;
            self
        }
        #[allow(missing_docs)]
        pub fn description(mut self, input: impl Into<String>) -> Self {
            self.description = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_description(mut self, input: Option<String>) -> Self {
            self.description = input;
            self
        }
        #[allow(missing_docs)]
        pub fn content(mut self, input: impl Into<String>) -> Self {
            self.content = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_content(mut self, input: Option<String>) -> Self {
            self.content = input;
            self
        }
        /// Consumes the builder and constructs a [`ContactFlow`](crate::model::ContactFlow)
        pub fn build(self) -> crate::model::ContactFlow {
            crate::model::ContactFlow {
                arn: self.arn,
                id: self.id,
                name: self.name,
                state: self.state,
                description: self.description,
                content: self.content,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::ContactFlowState;

    #[test]
    fn known_values_round_trip() {
        for value in ContactFlowState::values() {
            let state: ContactFlowState = value.parse().unwrap();
            assert_eq!(*value, state.as_str());
            assert_eq!(state, ContactFlowState::from(state.as_str()));
        }
    }

    #[test]
    fn unknown_value_is_rejected_by_parse() {
        let err = "DELETED".parse::<ContactFlowState>().unwrap_err();
        assert_eq!(
            "invalid enum value `DELETED` for ContactFlowState; expected one of: ACTIVE, ARCHIVED",
            err.to_string()
        );
        assert_eq!("DELETED", err.value());
        assert!(matches!(
            ContactFlowState::from("active"),
            ContactFlowState::Unknown(_)
        ));
    }
}
