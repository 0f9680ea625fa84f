pub mod controller;
pub mod current;

pub use controller::{BookingController, StartRequest, StartTransition};
pub use current::{BookingLike, BookingStub, CurrentBooking};
