//! Organizational document CRUD (bylaws, reports).

crate::routes::crud::crud_routes!(
    "/documents",
    noor_core::collections::DOCUMENTS,
    noor_core::OrgDocument
);
