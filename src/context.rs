//! Fluent combinators over a single reply envelope.
//!
//! [`ReplyContext`] wraps one [`Reply`] value and derives everything it does
//! from the reply's three accessors plus caller-supplied closures:
//!
//! - Optional accessors for the message and payload
//! - Equality predicates on the code
//! - `ensure_*` assertions that build a caller-supplied [`Fault`] at the
//!   failure site
//! - A `map` that reshapes the reply while pinning its code and message
//!   types
//! - `accept` consumers that observe the payload, optionally gated by a
//!   predicate on the whole reply
//!
//! Everything is synchronous and runs on the calling thread, in chain
//! order. The context never mutates the reply it wraps.

use tracing::instrument;

use crate::{Fault, Reply};

/// Immutable wrapper over one reply envelope.
///
/// A context is created from a reply with [`of`](ReplyContext::of) and holds
/// it unchanged for its whole lifetime. Assertions hand back the same
/// context on success so chains keep going through `?`; [`map`](ReplyContext::map)
/// is the only operation that produces a new context.
///
/// `P` may be a reference type: [`Reply`] is implemented for `&R` wherever
/// it is implemented for `R`, so a context can borrow an envelope owned
/// elsewhere.
///
/// ## Example
///
/// ```rust
/// use waybill::{ApiReply, CodedFault, ReplyContext};
///
/// fn user_name(reply: ApiReply<String>) -> Result<String, CodedFault> {
///     let ctx = ReplyContext::of(reply);
///     let name = ctx
///         .ensure_code_eq(&200, |r| CodedFault::with_args("reply.rejected", [r.code]))?
///         .ensure_data(|data| data.is_some(), |r| CodedFault::with_args("reply.empty", [r.code]))?
///         .data()
///         .cloned();
///     Ok(name.unwrap_or_default())
/// }
///
/// assert_eq!(user_name(ApiReply::ok("M".to_owned())).unwrap(), "M");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyContext<P> {
    original: P,
}

impl<P: Reply> ReplyContext<P> {
    /// Wrap a reply in a context.
    pub fn of(original: P) -> Self {
        Self { original }
    }

    /// The reply's status code.
    pub fn code(&self) -> &P::Code {
        self.original.code()
    }

    /// The reply's message, if it carries one.
    pub fn message(&self) -> Option<&P::Message> {
        self.original.message()
    }

    /// The reply's payload, if it carries one.
    pub fn data(&self) -> Option<&P::Data> {
        self.original.data()
    }

    /// The reply's payload, gated by a predicate on the whole reply.
    ///
    /// Returns [`data`](ReplyContext::data) when the predicate holds and
    /// `None` otherwise. The predicate sees the reply itself, so it can gate
    /// on the code or message as well as the payload.
    pub fn data_if<C>(&self, predicate: C) -> Option<&P::Data>
    where
        C: FnOnce(&P) -> bool,
    {
        if predicate(&self.original) {
            self.data()
        } else {
            None
        }
    }

    /// The wrapped reply, unchanged.
    pub fn peek(&self) -> &P {
        &self.original
    }

    /// Consume the context and hand the reply back.
    pub fn into_inner(self) -> P {
        self.original
    }

    /// Whether the reply's code equals the given value.
    pub fn code_eq(&self, value: &P::Code) -> bool {
        self.original.code() == value
    }

    /// Whether the reply's code differs from the given value.
    pub fn code_ne(&self, value: &P::Code) -> bool {
        !self.code_eq(value)
    }

    /// Assert that the reply's code equals the expected value.
    ///
    /// On success the same context is returned so the chain continues. On
    /// failure the `fault` closure is invoked once with the reply and its
    /// result is returned as the error; the closure runs only at the
    /// failure site.
    #[instrument(skip_all)]
    pub fn ensure_code_eq<E, F>(&self, expected: &P::Code, fault: F) -> Result<&Self, E>
    where
        E: Fault,
        F: FnOnce(&P) -> E,
    {
        if self.code_ne(expected) {
            tracing::debug!("Reply code does not match the expected value");
            return Err(fault(&self.original));
        }
        Ok(self)
    }

    /// Assert that the reply's code satisfies a predicate.
    ///
    /// Same success and failure behavior as
    /// [`ensure_code_eq`](ReplyContext::ensure_code_eq).
    #[instrument(skip_all)]
    pub fn ensure_code<C, E, F>(&self, predicate: C, fault: F) -> Result<&Self, E>
    where
        C: FnOnce(&P::Code) -> bool,
        E: Fault,
        F: FnOnce(&P) -> E,
    {
        if !predicate(self.original.code()) {
            tracing::debug!("Reply code rejected by predicate");
            return Err(fault(&self.original));
        }
        Ok(self)
    }

    /// Assert that the reply's payload satisfies a predicate.
    ///
    /// The predicate receives the raw payload slot, present or absent, and
    /// decides for itself what an acceptable payload is; an absent payload
    /// is not an error until the predicate says so. Failure behaves as in
    /// [`ensure_code_eq`](ReplyContext::ensure_code_eq).
    #[instrument(skip_all)]
    pub fn ensure_data<C, E, F>(&self, predicate: C, fault: F) -> Result<&Self, E>
    where
        C: FnOnce(Option<&P::Data>) -> bool,
        E: Fault,
        F: FnOnce(&P) -> E,
    {
        if !predicate(self.original.data()) {
            tracing::debug!("Reply data rejected by predicate");
            return Err(fault(&self.original));
        }
        Ok(self)
    }

    /// Build a new context by reshaping the reply.
    ///
    /// Only the payload type may change: the new reply type must keep the
    /// same code and message types, which the signature pins so chains
    /// typecheck without annotations. The source context is left untouched
    /// and stays usable.
    pub fn map<Q, F>(&self, f: F) -> ReplyContext<Q>
    where
        Q: Reply<Code = P::Code, Message = P::Message>,
        F: FnOnce(&P) -> Q,
    {
        ReplyContext::of(f(&self.original))
    }

    /// Run a consumer over the payload slot.
    ///
    /// The consumer always runs exactly once and sees the payload as-is,
    /// `None` included.
    pub fn accept<F>(&self, consumer: F)
    where
        F: FnOnce(Option<&P::Data>),
    {
        consumer(self.original.data());
    }

    /// Run a consumer over the payload slot when the reply passes a
    /// predicate.
    ///
    /// The predicate sees the whole reply; the consumer runs exactly once
    /// if it holds, not at all otherwise.
    pub fn accept_if<C, F>(&self, predicate: C, consumer: F)
    where
        C: FnOnce(&P) -> bool,
        F: FnOnce(Option<&P::Data>),
    {
        if predicate(&self.original) {
            consumer(self.original.data());
        }
    }
}
