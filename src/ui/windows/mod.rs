//! Screen and modal views; the modal ones implement `AppWindow`.

pub mod add_trip_view;
pub mod profile_view;
pub mod trips_view;
