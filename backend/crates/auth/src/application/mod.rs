//! Application Layer
//!
//! Use cases orchestrating domain objects and repositories.

pub mod config;
pub mod profile;
pub mod sign_in;
pub mod sign_up;

pub use profile::{GetProfileUseCase, ProfilePatch, UpdateProfileOutput, UpdateProfileUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
