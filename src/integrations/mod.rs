//! External service integrations.

pub mod booking_client {
    pub use crate::booking_client::*;
}

pub mod booking_models {
    pub use crate::booking_models::*;
}
