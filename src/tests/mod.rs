//! Consolidated test modules.
//!
//! End-to-end scenarios exercising the public API the way calling
//! middleware would: claims arrive as JSON from a token verifier, policies
//! are built once and evaluated per request.
