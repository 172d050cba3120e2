//! ORM enumeration types.

/// Entity metadata mapper strategies (annotation, docblock, xml, yaml).
pub mod mapper_kind;
