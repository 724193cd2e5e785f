//! nftower Core
//!
//! Shared data model for the Tower web API: the user profile record exchanged
//! between the browser-side application and the backend, together with the
//! embedded authentication payload it carries.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserData`, `UserProfile`, `JwtAuthData`, `Role`, `UserId`
//! - **Conformance**: a structural check that reports every missing or
//!   mistyped field of a JSON value before it is turned into a `UserData`
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use nftower_core::{parse_user_data, Role};
//!
//! let json = r#"{
//!     "id": 7,
//!     "userName": "ada",
//!     "email": "ada@example.com",
//!     "roles": ["ROLE_USER"],
//!     "jwtAuthData": {
//!         "username": "ada",
//!         "roles": ["ROLE_USER"],
//!         "access_token": "eyJhbGciOi",
//!         "token_type": "Bearer",
//!         "expires_in": 3600
//!     },
//!     "firstName": "Ada",
//!     "lastName": "Lovelace",
//!     "organization": "",
//!     "description": "",
//!     "avatar": ""
//! }"#;
//!
//! let user = parse_user_data(json).unwrap();
//! assert_eq!(user.display_name(), "Ada Lovelace");
//! assert!(user.has_role(Role::User));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod types;

pub use conformance::{
    check_jwt_auth_data, check_user_data, check_user_profile, parse_user_data,
    parse_user_profile, ConformanceReport, Violation, ViolationKind,
};
pub use error::{CoreError, Result};
pub use types::{JwtAuthData, Role, UserData, UserId, UserProfile};
