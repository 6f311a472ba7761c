pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod listing;
pub mod modal_frame;
pub mod modal_stack;
pub mod toast;
