pub mod follow_up_form;
pub mod guest_info;
pub mod guest_selector;
pub mod header;
pub mod success_screen;
