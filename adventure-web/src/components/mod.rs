pub mod contact_form;
pub mod countdown;
pub mod hud;
pub mod level_frame;
pub mod levels;
pub mod meter;
pub mod modal;
pub mod skills_panel;
