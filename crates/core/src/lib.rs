pub mod error;
pub mod event;
pub mod feedback;
pub mod state;

pub use error::{Result, SwatchError};
pub use event::{Message, PickerInput};
pub use feedback::{CopyFeedback, CopyTicket};
pub use state::AppState;
