//! Employee profile form components.

pub mod notice_banner;
pub mod picture_picker;
pub mod profile_form;

pub use notice_banner::{NoticeBanner, SignalNotifier};
pub use picture_picker::PicturePicker;
pub use profile_form::{FormServices, ProfileForm};
