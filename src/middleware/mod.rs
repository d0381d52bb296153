//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request.

/// JSON `Content-Type` enforcement for routes that take a body
pub mod content_type;
