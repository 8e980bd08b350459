// Adapters layer: concrete form readers and result displays.

pub mod display;
pub mod form;
