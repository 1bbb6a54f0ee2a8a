pub mod aggregate;

pub use aggregate::{SpecPlanEntry, SpecPlans};
