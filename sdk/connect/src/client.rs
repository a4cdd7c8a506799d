/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client for Amazon Connect.

use crate::error::{Error, ERRORS};
use crate::input::{DescribeContactFlowInput, UpdateContactFlowMetadataInput};
use crate::operation;
use crate::output::{DescribeContactFlowOutput, UpdateContactFlowMetadataOutput};
use sdk_http::client::HttpConnector;
use sdk_http::config::Config;
use sdk_http::protocol::ProtocolSettings;
use sdk_http::result::SdkError;
use std::sync::LazyLock;

/// Client for Amazon Connect.
#[derive(Debug)]
pub struct Client<C> {
    inner: sdk_http::client::Client<C>,
}

impl<C: HttpConnector> Client<C> {
    /// Creates a client sending requests through `conn`.
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        if let Err(err) = crate::shapes::shape_registry() {
            tracing::warn!(error = %err, "shape registry of the service is inconsistent");
        }
        LazyLock::force(&ERRORS);
        Self {
            inner: sdk_http::client::Client::new(conn, &conf, ProtocolSettings::rest_json()),
        }
    }

    /// Returns the connector requests are sent through.
    pub fn conn(&self) -> &C {
        self.inner.connector()
    }

    /// Updates the metadata of a contact flow: its name, description and state.
    pub fn update_contact_flow_metadata(
        &self,
        input: &UpdateContactFlowMetadataInput,
    ) -> Result<UpdateContactFlowMetadataOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::UPDATE_CONTACT_FLOW_METADATA, input, &ERRORS)
    }

    /// Describes a contact flow.
    pub fn describe_contact_flow(
        &self,
        input: &DescribeContactFlowInput,
    ) -> Result<DescribeContactFlowOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::DESCRIBE_CONTACT_FLOW, input, &ERRORS)
    }
}
