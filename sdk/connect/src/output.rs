/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::ContactFlow;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactFlowMetadataOutput {}

impl UpdateContactFlowMetadataOutput {
    /// Creates a new builder-style object to manufacture [`UpdateContactFlowMetadataOutput`](crate::output::UpdateContactFlowMetadataOutput)
    pub fn builder() -> crate::output::update_contact_flow_metadata_output::Builder {
        crate::output::update_contact_flow_metadata_output::Builder::default()
    }
}

/// See [`UpdateContactFlowMetadataOutput`](crate::output::UpdateContactFlowMetadataOutput)
pub mod update_contact_flow_metadata_output {
    /// A builder for [`UpdateContactFlowMetadataOutput`](crate::output::UpdateContactFlowMetadataOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}

    impl Builder {
        /// Consumes the builder and constructs a [`UpdateContactFlowMetadataOutput`](crate::output::UpdateContactFlowMetadataOutput)
        pub fn build(self) -> crate::output::UpdateContactFlowMetadataOutput {
            crate::output::UpdateContactFlowMetadataOutput {}
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeContactFlowOutput {
    /// Information about the contact flow.
    pub contact_flow: Option<ContactFlow>,
}

impl DescribeContactFlowOutput {
    /// Creates a new builder-style object to manufacture [`DescribeContactFlowOutput`](crate::output::DescribeContactFlowOutput)
    pub fn builder() -> crate::output::describe_contact_flow_output::Builder {
        crate::output::describe_contact_flow_output::Builder::default()
    }
}

/// See [`DescribeContactFlowOutput`](crate::output::DescribeContactFlowOutput)
pub mod describe_contact_flow_output {
    use crate::model::ContactFlow;

    /// A builder for [`DescribeContactFlowOutput`](crate::output::DescribeContactFlowOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) contact_flow: Option<ContactFlow>,
    }

    impl Builder {
        /// Information about the contact flow.
        pub fn contact_flow(mut self, input: ContactFlow) -> Self {
            self.contact_flow = Some(input);
            self
        }
        /// Information about the contact flow.
        pub fn set_contact_flow(mut self, input: Option<ContactFlow>) -> Self {
            self.contact_flow = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeContactFlowOutput`](crate::output::DescribeContactFlowOutput)
        pub fn build(self) -> crate::output::DescribeContactFlowOutput {
            crate::output::DescribeContactFlowOutput {
                contact_flow: self.contact_flow,
            }
        }
    }
}
