pub mod info;
pub mod picker;
pub mod preview;

pub use info::ColorInfoWidget;
pub use picker::PickerWidget;
pub use preview::PreviewWidget;
