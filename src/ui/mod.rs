pub mod form;
pub mod messages;
pub mod render;
pub mod template;
