pub mod chord;
pub mod offset;
pub mod pitch;
