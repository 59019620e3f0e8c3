pub mod m202607010001_create_shifts;
pub mod m202607010002_create_session_reservations;
pub mod m202607010003_create_events;
pub mod m202607010004_create_event_reservations;
pub mod m202607010005_create_staffs;
pub mod m202607010006_create_attendance_records;
pub mod m202607050001_create_categories;
pub mod m202607050002_create_books;
pub mod m202607050003_create_loans;
