/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Formatting values into URI labels and expanding URI templates.

use crate::error::BuildError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that are percent encoded in labels and query strings.
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// How a label is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// Every reserved character is encoded, including `/`.
    Default,
    /// `/` is left as is so the label can span several path segments (`{Key+}`).
    Greedy,
}

/// Percent encodes `t` for use as a URI label.
pub fn fmt_string<T: AsRef<str>>(t: T, strategy: EncodingStrategy) -> String {
    let uri_set = if strategy == EncodingStrategy::Greedy {
        GREEDY
    } else {
        BASE_SET
    };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

/// A URI template with every label substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedUri {
    raw: String,
    encoded: String,
}

impl ExpandedUri {
    /// The URI with label values substituted as is.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The URI with percent encoded label values. This is the form that is sent.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

/// Substitutes every `{Name}` and `{Name+}` placeholder of `template` with the value of the
/// label called `Name`.
///
/// Labels that are missing or empty are rejected. A literal query string after `?` is copied
/// through unchanged.
pub fn expand_template(
    template: &'static str,
    labels: &[(&str, String)],
) -> Result<ExpandedUri, BuildError> {
    let (path, literal_query) = match template.find('?') {
        Some(idx) => template.split_at(idx),
        None => (template, ""),
    };

    let mut raw = String::with_capacity(template.len());
    let mut encoded = String::with_capacity(template.len());
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|end| start + end)
            .ok_or(BuildError::InvalidUriTemplate(template))?;
        raw.push_str(&rest[..start]);
        encoded.push_str(&rest[..start]);

        let placeholder = &rest[start + 1..end];
        let (name, strategy) = match placeholder.strip_suffix('+') {
            Some(name) => (name, EncodingStrategy::Greedy),
            None => (placeholder, EncodingStrategy::Default),
        };
        if name.is_empty() || name.contains('{') {
            return Err(BuildError::InvalidUriTemplate(template));
        }
        let value = labels
            .iter()
            .find(|(label, _)| *label == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| BuildError::MissingLabel(name.to_string()))?;
        raw.push_str(value);
        encoded.push_str(&fmt_string(value, strategy));
        rest = &rest[end + 1..];
    }
    if rest.contains('}') {
        return Err(BuildError::InvalidUriTemplate(template));
    }
    raw.push_str(rest);
    encoded.push_str(rest);
    raw.push_str(literal_query);
    encoded.push_str(literal_query);
    Ok(ExpandedUri { raw, encoded })
}
