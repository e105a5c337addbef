pub mod career;
pub mod plan;
