pub mod controls;
pub mod pixel;
