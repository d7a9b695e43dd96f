//! Portable HTTP request layer for the Wicket single-page app.
//!
//! Every call to the backend goes through [`ApiClient`]: it attaches the
//! stored bearer token, unwraps the standard response envelope, and turns
//! both business-level and transport-level failures into [`ApiError`].
//! [`Notice::for_error`] maps any failure to the UI notifications the
//! frontend should render.

pub mod client;
pub mod envelope;
pub mod error;
pub mod identity;
pub mod notice;
pub mod token;

pub use client::{ApiClient, ApiClientBuilder};
pub use envelope::{Envelope, ShowType};
pub use error::{ApiError, TransportPhase};
pub use identity::{Identity, IdentityError};
pub use notice::{Notice, NoticeDisplay, NoticeLevel};
pub use token::{MemoryTokenStore, TokenStore};
