//! Document-store helpers for utilkit
//!
//! Field projections, offset/limit pagination and ObjectId validation.

mod object_id;
mod pagination;
mod projection;

pub use bson::oid::ObjectId;
pub use object_id::{convert_to_mongo_object_id, is_valid_mongo_object_id};
pub use pagination::{PageRequest, Pagination, get_pagination};
pub use projection::{INCLUDE, Projection, fields_list_to_mongo_projection};
