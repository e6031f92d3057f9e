mod delivery;
mod error;
mod form;
mod inquiry;
mod types;

pub use delivery::*;
pub use error::*;
pub use form::*;
pub use inquiry::*;
pub use types::*;
