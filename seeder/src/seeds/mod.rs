pub mod book;
pub mod category;
pub mod event;
pub mod shift;
pub mod staff;
