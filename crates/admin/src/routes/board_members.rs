//! Board member CRUD.

crate::routes::crud::crud_routes!(
    "/board-members",
    noor_core::collections::BOARD_MEMBERS,
    noor_core::BoardMember
);
