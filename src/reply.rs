//! Reply envelope contract and a ready-made implementation.
//!
//! Remote APIs in this crate's domain answer with a tri-field envelope: a
//! mandatory status code, an optional human-readable message, and an
//! optional data payload. [`Reply`] captures that shape as a trait so the
//! rest of the crate can stay generic over the concrete envelope type, and
//! [`ApiReply`] provides the common `i32` / `String` rendition for services
//! that do not need their own.

use serde::{Deserialize, Serialize};

/// Contract satisfied by tri-field reply envelopes.
///
/// The code is mandatory on a well-formed reply; message and payload are
/// semantically optional and therefore surfaced as `Option`. Code and
/// message types must be orderable and serializable, the payload is
/// unconstrained.
pub trait Reply {
    /// Business/status code type.
    type Code: Ord + Serialize;
    /// Human-readable message type.
    type Message: Ord + Serialize;
    /// Payload type.
    type Data;

    /// The reply's status code.
    fn code(&self) -> &Self::Code;

    /// The reply's message, if it carries one.
    fn message(&self) -> Option<&Self::Message>;

    /// The reply's payload, if it carries one.
    fn data(&self) -> Option<&Self::Data>;
}

/// A reference to a reply is itself a reply, so wrappers can borrow an
/// envelope instead of taking ownership of it.
impl<R: Reply> Reply for &R {
    type Code = R::Code;
    type Message = R::Message;
    type Data = R::Data;

    fn code(&self) -> &Self::Code {
        (**self).code()
    }

    fn message(&self) -> Option<&Self::Message> {
        (**self).message()
    }

    fn data(&self) -> Option<&Self::Data> {
        (**self).data()
    }
}

/// Stock reply envelope with an `i32` code and a `String` message.
///
/// Fields are public so callers can build replies with struct literals; the
/// constructors cover the common success and failure shapes.
///
/// ## Example
///
/// ```rust
/// use waybill::ApiReply;
///
/// let reply = ApiReply {
///     code: 200,
///     message: Some("success".to_owned()),
///     data: Some(42),
/// };
///
/// // or, equivalently
/// let reply = ApiReply::ok(42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReply<S> {
    /// Status code.
    pub code: i32,
    /// Optional message.
    pub message: Option<String>,
    /// Optional payload.
    pub data: Option<S>,
}

impl<S> ApiReply<S> {
    /// A successful reply carrying the given payload.
    pub fn ok(data: S) -> Self {
        Self {
            code: 200,
            message: Some("success".to_owned()),
            data: Some(data),
        }
    }

    /// The stock failure reply: code 500, no payload.
    pub fn failure() -> Self {
        Self::failure_with(500, "failure")
    }

    /// A failure reply with a caller-chosen code and message.
    pub fn failure_with(code: i32, message: impl ToString) -> Self {
        Self {
            code,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

impl<S> Reply for ApiReply<S> {
    type Code = i32;
    type Message = String;
    type Data = S;

    fn code(&self) -> &i32 {
        &self.code
    }

    fn message(&self) -> Option<&String> {
        self.message.as_ref()
    }

    fn data(&self) -> Option<&S> {
        self.data.as_ref()
    }
}

impl<S> From<(i32, Option<String>, Option<S>)> for ApiReply<S> {
    fn from(value: (i32, Option<String>, Option<S>)) -> Self {
        ApiReply {
            code: value.0,
            message: value.1,
            data: value.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_replies_carry_the_success_shape() {
        let reply = ApiReply::ok(7);

        assert_eq!(reply.code, 200);
        assert_eq!(reply.message.as_deref(), Some("success"));
        assert_eq!(reply.data, Some(7));
    }

    #[test]
    fn failure_replies_have_no_payload() {
        let reply = ApiReply::<u32>::failure();

        assert_eq!(reply.code, 500);
        assert_eq!(reply.message.as_deref(), Some("failure"));
        assert!(reply.data.is_none());

        let reply = ApiReply::<u32>::failure_with(404, "not found");

        assert_eq!(reply.code, 404);
        assert_eq!(reply.message.as_deref(), Some("not found"));
        assert!(reply.data.is_none());
    }

    #[test]
    fn accessors_follow_field_presence() {
        let reply = ApiReply {
            code: 200,
            message: None,
            data: Some("x"),
        };

        assert_eq!(Reply::code(&reply), &200);
        assert_eq!(Reply::message(&reply), None);
        assert_eq!(Reply::data(&reply), Some(&"x"));
    }

    #[test]
    fn borrowed_replies_delegate_to_the_underlying_reply() {
        let reply = ApiReply::ok("M");
        let borrowed = &reply;

        assert_eq!(Reply::code(&borrowed), &200);
        assert_eq!(Reply::message(&borrowed).map(String::as_str), Some("success"));
        assert_eq!(Reply::data(&borrowed), Some(&"M"));
    }

    #[test]
    fn replies_serialize_with_their_wire_field_names() {
        let value = serde_json::to_value(ApiReply::ok("M")).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"code": 200, "message": "success", "data": "M"})
        );
    }

    #[test]
    fn replies_convert_from_field_tuples() {
        let reply: ApiReply<&str> = (200, Some("success".to_owned()), Some("M")).into();

        assert_eq!(reply, ApiReply::ok("M"));
    }
}
