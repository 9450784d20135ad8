//! Mechanic module: the jobs assigned to the logged-in mechanic.

mod jobs;

pub use jobs::MechanicJobService;
