mod api;
pub mod client;
mod constants;
mod error;
pub mod events;
pub mod mailing_lists;
pub mod members;
mod page;
pub mod templates;

pub use mailroom_api_model::*;

pub use self::api::{ApiError, Response};
pub use self::client::{Client, ClientBuilder};
pub use self::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::error::{Error, Result};
pub use self::page::PageIterator;
