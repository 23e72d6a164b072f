pub mod use_follow_up_form;
pub mod use_guests;
