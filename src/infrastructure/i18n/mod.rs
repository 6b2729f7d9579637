//! Localized user-facing messages.
//!
//! Messages are looked up by a stable key through [`MessageCatalog`]. The API
//! layer resolves the caller's language from `Accept-Language` with
//! [`negotiate_language`] and asks the catalog for the text.

mod catalog;

pub use catalog::{
    DEFAULT_LANGUAGE, FAVORITE_SOURCE_DUPLICATED, MessageCatalog, StaticMessageCatalog,
    negotiate_language,
};
