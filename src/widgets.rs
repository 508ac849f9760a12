pub(crate) mod converter;
pub(crate) mod copy_button;
pub(crate) mod hash_calc;
pub(crate) mod hider;
pub(crate) mod mixer;
pub(crate) mod reveal;
pub(crate) mod ticket;
