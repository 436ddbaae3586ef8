//! News post CRUD.

crate::routes::crud::crud_routes!("/news", noor_core::collections::POSTS, noor_core::Post);
