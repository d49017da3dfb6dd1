pub mod controller;
pub mod error;
pub mod transport;
pub mod view;

pub use controller::{render, LoginForm, LoginOutcome};
pub use error::ClientError;
pub use transport::{HttpLoginClient, LoginClient};
pub use view::{ErrorElement, FormSnapshot, FormView, MemoryForm};
