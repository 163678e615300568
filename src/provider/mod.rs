//! Named, localized template messages
//!
//! The module is structured as:
//! - `interface`: Traits for locating resources and providing messages
//! - `file`: Filesystem resource locator walking the locale chain
//! - `message`: Provider rendering located templates with a render context

pub mod file;
pub mod interface;
pub mod message;

pub use file::{FileResourceLocator, LocatedResource};
pub use interface::{MessageProvider, ResourceLocator};
pub use message::FileMessageProvider;
