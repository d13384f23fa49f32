pub mod gui_app;
pub mod keyboard_input;
