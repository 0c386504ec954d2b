pub mod code;
pub mod course;
pub mod degree;
pub mod plan;
pub mod plan_type;
pub mod program;
pub mod semester;
