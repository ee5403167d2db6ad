//! Value Object Module

pub mod admin_name;
pub mod admin_password;
