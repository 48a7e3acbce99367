//! Core domain entities.
//!
//! A [`ShortLink`] is the only entity: a named mapping from a short path
//! segment to a target URL plus redirect metadata.

pub mod shortlink;

pub use shortlink::{
    DEFAULT_AFTER, DEFAULT_REDIRECT_CODE, REDIRECT_CODES, RESOURCE_KIND, ShortLink, ShortLinkSpec,
    ShortLinkStatus, validate_name,
};
