// Career catalog: repository seam, admin CRUD, and the starter seed.

pub mod handlers;
pub mod repository;
pub mod seed;
