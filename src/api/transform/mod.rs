//! Pure mappings between wire resources and domain shapes.
//!
//! Assemblers do no I/O and hold no state.

pub mod favorite_source_assembler;

pub use favorite_source_assembler::{
    create_command_from_resource, get_all_query_from_page, list_resource_from_entities,
    resource_from_entity,
};
