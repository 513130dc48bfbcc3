pub mod charts;
pub mod controls;
pub mod map;
pub mod popup;
