pub mod record;
pub mod roster;
pub mod source;
