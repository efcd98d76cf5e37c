pub mod contact_form;
pub mod greeter;
pub mod hover;
pub mod navigator;
pub mod scroll;
pub mod typing;
