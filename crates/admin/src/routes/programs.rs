//! Programs CRUD.

crate::routes::crud::crud_routes!("/programs", noor_core::collections::PROGRAMS, noor_core::Program);
