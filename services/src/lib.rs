pub mod attendance;
pub mod capacity;
pub mod clock;
pub mod error;
pub mod inventory;
pub mod loan;
pub mod payment;
pub mod reservation;
pub mod retry;

pub use error::ServiceError;
