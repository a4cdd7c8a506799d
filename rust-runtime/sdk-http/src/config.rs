/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client configuration.

use crate::protocol::ProtocolSettings;

/// Configuration shared by every operation of a service client.
#[derive(Debug, Clone, Default)]
pub struct Config {
    endpoint_url: Option<String>,
    protocol: Option<ProtocolSettings>,
}

impl Config {
    /// Returns a builder for `Config`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Base URL requests are sent to, such as `https://messaging-chime.us-east-1.amazonaws.com`.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Protocol settings overriding the ones of the service.
    pub fn protocol(&self) -> Option<&ProtocolSettings> {
        self.protocol.as_ref()
    }

    /// Returns a builder with the current settings.
    pub fn to_builder(&self) -> Builder {
        Builder {
            endpoint_url: self.endpoint_url.clone(),
            protocol: self.protocol.clone(),
        }
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    endpoint_url: Option<String>,
    protocol: Option<ProtocolSettings>,
}

impl Builder {
    /// Sets the endpoint URL requests are sent to.
    ///
    /// # Examples
    /// ```
    /// use sdk_http::config::Config;
    ///
    /// let config = Config::builder()
    ///     .endpoint_url("https://messaging-chime.us-east-1.amazonaws.com")
    ///     .build();
    /// assert_eq!(
    ///     Some("https://messaging-chime.us-east-1.amazonaws.com"),
    ///     config.endpoint_url()
    /// );
    /// ```
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    /// Sets the endpoint URL requests are sent to.
    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Overrides the protocol settings of the service.
    pub fn protocol(mut self, protocol: ProtocolSettings) -> Self {
        self.set_protocol(Some(protocol));
        self
    }

    /// Overrides the protocol settings of the service.
    pub fn set_protocol(&mut self, protocol: Option<ProtocolSettings>) -> &mut Self {
        self.protocol = protocol;
        self
    }

    /// Builds the config.
    pub fn build(self) -> Config {
        Config {
            endpoint_url: self.endpoint_url,
            protocol: self.protocol,
        }
    }
}
