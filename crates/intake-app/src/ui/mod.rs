pub(crate) mod entry_form;
pub(crate) mod entry_list;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod keypad;
pub(crate) mod nav_bar;
pub(crate) mod palette;
pub(crate) mod screen;
pub(crate) mod summary_card;
