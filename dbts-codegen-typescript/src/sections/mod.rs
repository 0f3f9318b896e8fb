//! The declarations a rendered file is made of, in output order.

mod dto;
mod entity;
mod header;
mod imports;
mod query_params;

pub(crate) use dto::{create_dto, update_dto};
pub(crate) use entity::entity_interface;
pub(crate) use header::FileHeader;
pub(crate) use imports::ImportHints;
pub(crate) use query_params::query_params;
