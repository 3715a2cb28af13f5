//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The shared shapes live in the `identity` crate so the server serializes
//! the same structs; this module is the client's single import surface for
//! them.

pub use identity::{
    LoginRequest, Profile, Role, SessionUser, SignupRequest, UpdateProfileRequest,
    UpdateRoleRequest,
};
