//! Transport DTOs shared by the admin frontend and the backend proxy.

pub mod domain;
pub mod shared;
pub mod system;
