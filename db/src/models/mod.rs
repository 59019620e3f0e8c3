pub mod attendance_record;
pub mod book;
pub mod book_copy;
pub mod category;
pub mod event;
pub mod event_reservation;
pub mod inventory_log;
pub mod loan;
pub mod session_reservation;
pub mod shift;
pub mod staff;
pub mod transaction;
