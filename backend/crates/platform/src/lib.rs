//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) with memory zeroization

pub mod password;
