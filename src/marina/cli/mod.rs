//! Terminal side of marina: the menu loop and everything it prints.

pub(crate) mod menu;
pub(crate) mod print;
