//! Data access for the front-desk list screens.
//!
//! # Architecture
//!
//! - [`DataCollaborator`] is the one backend seam. Whatever actually stores
//!   patients, appointments or sales sits behind it.
//! - [`Repository`] reads listings through a shared [`TtlCache`] and, after
//!   every write, invalidates the listings that write made stale.
//! - [`ListScreen`] binds one [`Collection`] to a [`GridView`] so search,
//!   sorting and paging run over the last successfully loaded records.
//!
//! [`TtlCache`]: frontdesk_cache::TtlCache
//! [`GridView`]: frontdesk_grid::GridView

mod collaborator;
mod collection;
mod config;
mod error;
mod memory;
mod repository;
mod screen;

pub use collaborator::DataCollaborator;
pub use collection::{Collection, COLLECTIONS_NAMESPACE};
pub use config::FrontDeskConfig;
pub use error::{ConfigError, ConfigResult, DataError, DataResult};
pub use memory::InMemoryCollaborator;
pub use repository::Repository;
pub use screen::ListScreen;
