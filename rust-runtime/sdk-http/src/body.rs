/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Request and response bodies.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// Body of a request or response.
///
/// JSON payloads are always fully buffered, so the body holds its bytes until they are polled
/// out by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkBody {
    /// A buffered body. `None` once the data has been polled.
    Once(Option<Bytes>),
}

impl SdkBody {
    /// An empty body.
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    /// Returns the buffered bytes, or `None` if there are none.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(bytes),
            SdkBody::Once(None) => None,
        }
    }

    /// Number of buffered bytes.
    pub fn content_length(&self) -> u64 {
        self.bytes().map(|bytes| bytes.len() as u64).unwrap_or(0)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => Poll::Ready(opt.take().map(Ok)),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        Self::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        self.bytes().is_none()
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;
    use std::pin::Pin;
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn noop_waker() -> Waker {
        fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        fn noop(_: *const ()) {}
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }

    #[test]
    fn buffered_bytes() {
        let body = SdkBody::from("{}");
        assert_eq!(Some(&b"{}"[..]), body.bytes());
        assert_eq!(2, body.content_length());
        assert_eq!(None, SdkBody::empty().bytes());
        assert_eq!(0, SdkBody::default().content_length());
    }

    #[test]
    fn polls_data_once() {
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut body = SdkBody::from(vec![1, 2, 3]);
        assert_eq!(3, body.size_hint().exact().unwrap());
        match Pin::new(&mut body).poll_data(&mut cx) {
            Poll::Ready(Some(Ok(data))) => assert_eq!(&data[..], &[1, 2, 3]),
            other => panic!("unexpected poll result: {:?}", other.map(|o| o.is_some())),
        }
        assert!(body.is_end_stream());
        assert!(matches!(
            Pin::new(&mut body).poll_data(&mut cx),
            Poll::Ready(None)
        ));
    }
}
