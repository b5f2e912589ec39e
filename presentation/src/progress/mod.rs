//! Progress reporting for round execution

pub mod reporter;
