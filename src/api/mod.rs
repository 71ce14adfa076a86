pub mod address;
pub mod attendance;
pub mod employee;
