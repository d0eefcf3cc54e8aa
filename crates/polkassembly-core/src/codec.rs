//! Decode/encode boundary with the HTTP client.
//!
//! The client that talks to the API is not part of this crate. It hands over
//! the status code and raw body of each response and receives request bodies
//! as bytes; these functions turn one into the other.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, CodecError, CodecResult};

/// Decode a JSON body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> CodecResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(CodecError::EmptyBody);
    }
    debug!(
        target_type = std::any::type_name::<T>(),
        bytes = body.len(),
        "Decoding response body"
    );
    Ok(serde_json::from_slice(body)?)
}

/// Decode a response, mapping non-success statuses to errors.
///
/// 2xx bodies decode as `T`. Anything else becomes [`CodecError::Api`] when
/// the body is the API's error envelope with some text in it, or
/// [`CodecError::Http`] carrying the raw body otherwise.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> CodecResult<T> {
    if (200..300).contains(&status) {
        return decode(body);
    }

    match serde_json::from_slice::<ApiError>(body) {
        Ok(error) if !error.is_empty() => {
            warn!(status, message = error.message_or_error(), "API returned an error");
            Err(CodecError::Api { status, error })
        }
        _ => {
            let body = String::from_utf8_lossy(body).into_owned();
            warn!(status, "API returned a non-success status without an error envelope");
            Err(CodecError::Http { status, body })
        }
    }
}

/// Encode a request body.
pub fn encode<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateVoteRequest, Post, SubscriptionStatus, VoteListingResponse};

    #[test]
    fn test_decode_success() {
        let status: SubscriptionStatus = decode(br#"{"subscribed": true}"#).unwrap();
        assert!(status.subscribed);
    }

    #[test]
    fn test_decode_empty_body() {
        let result: CodecResult<Post> = decode(b"");
        assert!(matches!(result, Err(CodecError::EmptyBody)));

        let result: CodecResult<Post> = decode(b"  \n");
        assert!(matches!(result, Err(CodecError::EmptyBody)));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result: CodecResult<Post> = decode(b"{not json");
        assert!(matches!(result, Err(CodecError::Json(_))));
    }

    #[test]
    fn test_decode_response_ok() {
        let body = br#"{"votes": [{"id": "v1", "vote": "aye"}], "count": 1}"#;
        let resp: VoteListingResponse = decode_response(200, body).unwrap();
        assert_eq!(resp.votes.len(), 1);
        assert_eq!(resp.count, 1);
    }

    #[test]
    fn test_decode_response_error_envelope() {
        let body = br#"{"error": "NOT_FOUND", "message": "Post not found"}"#;
        let result: CodecResult<Post> = decode_response(404, body);
        match result {
            Err(CodecError::Api { status, error }) => {
                assert_eq!(status, 404);
                assert_eq!(error.message_or_error(), "Post not found");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_response_error_without_message() {
        let body = br#"{"error": "Unauthorized"}"#;
        let result: CodecResult<Post> = decode_response(401, body);
        match result {
            Err(CodecError::Api { error, .. }) => assert_eq!(error.to_string(), "Unauthorized"),
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_response_null_error_field() {
        let body = br#"{"error": null, "message": "Invalid token"}"#;
        let result: CodecResult<Post> = decode_response(401, body);
        match result {
            Err(CodecError::Api { status, error }) => {
                assert_eq!(status, 401);
                assert_eq!(error.to_string(), "Invalid token");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_post_with_null_scalars() {
        let body = br#"{"id": "p", "index": 1, "content": null, "createdAt": null, "network": "polkadot"}"#;
        let post: Post = decode_response(200, body).unwrap();
        assert_eq!(post.index, 1);
        assert!(post.content.is_empty());
        assert_eq!(post.created_at, chrono::DateTime::<chrono::Utc>::default());
    }

    #[test]
    fn test_decode_response_plain_text_error() {
        let result: CodecResult<Post> = decode_response(502, b"Bad Gateway");
        match result {
            Err(CodecError::Http { status, body }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_response_empty_envelope_is_http_error() {
        let result: CodecResult<Post> = decode_response(500, br#"{"detail": "oops"}"#);
        assert!(matches!(result, Err(CodecError::Http { status: 500, .. })));
    }

    #[test]
    fn test_encode_request() {
        let body = encode(&CreateVoteRequest::aye(3)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["postId"], 3);
        assert_eq!(value["vote"], "aye");
    }
}
