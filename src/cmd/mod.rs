pub mod layout;
pub mod simulate;
pub mod suggest;
