// Domain layer: the record shapes. Validation rules live in core::validator and utils::validation.

pub mod model;
