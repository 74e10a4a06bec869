pub mod booking;
pub mod repository;

pub use booking::AppointmentBookingService;
pub use repository::AppointmentRepository;
