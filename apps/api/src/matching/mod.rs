// Career matching core: weighted multi-factor scoring of a user profile
// against the career catalog. Pure functions — the handlers own catalog
// access and ranking policy.

pub mod education;
pub mod handlers;
pub mod scorer;
pub mod weights;
