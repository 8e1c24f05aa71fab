pub mod distance;
pub mod events;
pub mod invite;
pub mod loader;
pub mod report;
pub mod selector;

pub use crate::domain::model::{Customer, Event, GeoPoint, Invitee, Located};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
