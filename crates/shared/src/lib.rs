pub mod domain;
pub mod error;
pub mod protocol;

pub use domain::Credentials;
pub use error::ValidationError;
pub use protocol::{LoginReply, LOGIN_PATH};
