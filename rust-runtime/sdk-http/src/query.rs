/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Formatting values into query strings.

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

/// Percent encodes `t` for use as a query parameter name or value.
pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends query parameters to a URI that may already carry a query string.
#[derive(Debug)]
pub struct QueryWriter {
    new_path_and_query: String,
    prefix: Option<char>,
}

impl QueryWriter {
    /// Starts writing parameters after `path`.
    pub fn new(path: impl Into<String>) -> Self {
        let new_path_and_query = path.into();
        let prefix = if new_path_and_query.contains('?') {
            if new_path_and_query.ends_with('?') || new_path_and_query.ends_with('&') {
                None
            } else {
                Some('&')
            }
        } else {
            Some('?')
        };
        QueryWriter {
            new_path_and_query,
            prefix,
        }
    }

    /// Appends `k=v`, encoding both.
    pub fn insert(&mut self, k: &str, v: &str) {
        self.push_prefix();
        self.new_path_and_query.push_str(&fmt_string(k));
        self.new_path_and_query.push('=');
        self.new_path_and_query.push_str(&fmt_string(v));
    }

    fn push_prefix(&mut self) {
        if let Some(prefix) = self.prefix {
            self.new_path_and_query.push(prefix);
        }
        self.prefix = Some('&');
    }

    /// Returns the path with the query string.
    pub fn build(self) -> String {
        self.new_path_and_query
    }
}

#[cfg(test)]
mod test {
    use super::{fmt_string, QueryWriter};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;,").as_str(), "%26%3D%3B%2C");
        assert_eq!(
            fmt_string("2019-12-16T23:48:18Z").as_str(),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    #[test]
    fn writer_without_query() {
        let mut writer = QueryWriter::new("/channels");
        writer.insert("max-results", "10");
        writer.insert("next-token", "a b");
        assert_eq!("/channels?max-results=10&next-token=a%20b", writer.build());
    }

    #[test]
    fn writer_with_literal_query() {
        let mut writer = QueryWriter::new("/channels/arn?operation=channel-flow-callback");
        writer.insert("type", "DEFAULT");
        assert_eq!(
            "/channels/arn?operation=channel-flow-callback&type=DEFAULT",
            writer.build()
        );

        let mut writer = QueryWriter::new("/channels?");
        writer.insert("a", "b");
        assert_eq!("/channels?a=b", writer.build());
    }

    #[test]
    fn writer_without_parameters() {
        assert_eq!("/", QueryWriter::new("/").build());
    }
}
