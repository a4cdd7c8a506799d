/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::ContactFlowState;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactFlowMetadataInput {
    /// The identifier of the Amazon Connect instance.
    pub instance_id: Option<String>,
    /// The identifier of the contact flow.
    pub contact_flow_id: Option<String>,
    /// The new name of the contact flow.
    pub name: Option<String>,
    /// The new description of the contact flow.
    pub description: Option<String>,
    /// The new state of the contact flow.
    pub contact_flow_state: Option<ContactFlowState>,
}

impl UpdateContactFlowMetadataInput {
    /// Creates a new builder-style object to manufacture [`UpdateContactFlowMetadataInput`](crate::input::UpdateContactFlowMetadataInput)
    pub fn builder() -> crate::input::update_contact_flow_metadata_input::Builder {
        crate::input::update_contact_flow_metadata_input::Builder::default()
    }
}

/// See [`UpdateContactFlowMetadataInput`](crate::input::UpdateContactFlowMetadataInput)
pub mod update_contact_flow_metadata_input {
    use crate::model::ContactFlowState;

    /// A builder for [`UpdateContactFlowMetadataInput`](crate::input::UpdateContactFlowMetadataInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instance_id: Option<String>,
        pub(crate) contact_flow_id: Option<String>,
        pub(crate) name: Option<String>,
        pub(crate) description: Option<String>,
        pub(crate) contact_flow_state: Option<ContactFlowState>,
    }

    impl Builder {
        /// The identifier of the Amazon Connect instance.
        pub fn instance_id(mut self, input: impl Into<String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// The identifier of the Amazon Connect instance.
        pub fn set_instance_id(mut self, input: Option<String>) -> Self {
            self.instance_id = input;
            self
        }
        /// The identifier of the contact flow.
        pub fn contact_flow_id(mut self, input: impl Into<String>) -> Self {
            self.contact_flow_id = Some(input.into());
            self
        }
        /// The identifier of the contact flow.
        pub fn set_contact_flow_id(mut self, input: Option<String>) -> Self {
            self.contact_flow_id = input;
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
        pub fn contact_flow_state(mut self, input: ContactFlowState) -> Self {
            self.contact_flow_state = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_contact_flow_state(mut self, input: Option<ContactFlowState>) -> Self {
            self.contact_flow_state = input;
            self
        }
        /// Consumes the builder and constructs a [`UpdateContactFlowMetadataInput`](crate::input::UpdateContactFlowMetadataInput)
        pub fn build(self) -> crate::input::UpdateContactFlowMetadataInput {
            crate::input::UpdateContactFlowMetadataInput {
                instance_id: self.instance_id,
                contact_flow_id: self.contact_flow_id,
                name: self.name,
                description: self.description,
                contact_flow_state: self.contact_flow_state,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeContactFlowInput {
    /// The identifier of the Amazon Connect instance.
    pub instance_id: Option<String>,
    /// The identifier of the contact flow.
    pub contact_flow_id: Option<String>,
}

impl DescribeContactFlowInput {
    /// Creates a new builder-style object to manufacture [`DescribeContactFlowInput`](crate::input::DescribeContactFlowInput)
    pub fn builder() -> crate::input::describe_contact_flow_input::Builder {
        crate::input::describe_contact_flow_input::Builder::default()
    }
}

/// See [`DescribeContactFlowInput`](crate::input::DescribeContactFlowInput)
pub mod describe_contact_flow_input {
    /// A builder for [`DescribeContactFlowInput`](crate::input::DescribeContactFlowInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) instance_id: Option<String>,
        pub(crate) contact_flow_id: Option<String>,
    }

    impl Builder {
        /// The identifier of the Amazon Connect instance.
        pub fn instance_id(mut self, input: impl Into<String>) -> Self {
            self.instance_id = Some(input.into());
            self
        }
        /// The identifier of the Amazon Connect instance.
        pub fn set_instance_id(mut self, input: Option<String>) -> Self {
            self.instance_id = input;
            self
        }
        /// The identifier of the contact flow.
        pub fn contact_flow_id(mut self, input: impl Into<String>) -> Self {
            self.contact_flow_id = Some(input.into());
            self
        }
        /// The identifier of the contact flow.
        pub fn set_contact_flow_id(mut self, input: Option<String>) -> Self {
            self.contact_flow_id = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeContactFlowInput`](crate::input::DescribeContactFlowInput)
        pub fn build(self) -> crate::input::DescribeContactFlowInput {
            crate::input::DescribeContactFlowInput {
                instance_id: self.instance_id,
                contact_flow_id: self.contact_flow_id,
            }
        }
    }
}
