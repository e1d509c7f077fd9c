//! Per-domain endpoint wrappers.
//!
//! Each domain is a borrowed view over a [`Client`]; each method picks a
//! literal path, delegates to [`Client::request`], and flattens the envelope
//! into the endpoint's response type with
//! [`Envelope::into_response`](crate::Envelope::into_response).

use crate::client::Client;
use crate::transport::Transport;

pub mod analytics;
pub mod chats;
pub mod fbs;
pub mod finance;
pub mod products;
pub mod returns;
pub mod warehouses;

pub use analytics::Analytics;
pub use chats::Chats;
pub use fbs::Fbs;
pub use finance::Finance;
pub use products::Products;
pub use returns::Returns;
pub use warehouses::Warehouses;

impl<T: Transport> Client<T> {
    pub fn analytics(&self) -> Analytics<'_, T> {
        Analytics { client: self }
    }

    pub fn chats(&self) -> Chats<'_, T> {
        Chats { client: self }
    }

    pub fn fbs(&self) -> Fbs<'_, T> {
        Fbs { client: self }
    }

    pub fn finance(&self) -> Finance<'_, T> {
        Finance { client: self }
    }

    pub fn products(&self) -> Products<'_, T> {
        Products { client: self }
    }

    pub fn returns(&self) -> Returns<'_, T> {
        Returns { client: self }
    }

    pub fn warehouses(&self) -> Warehouses<'_, T> {
        Warehouses { client: self }
    }
}
