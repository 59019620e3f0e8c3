mod attendance_test;
mod books_test;
mod event_reservations_test;
mod events_test;
mod health_test;
mod loans_test;
mod payments_test;
mod session_reservations_test;
