//! Command implementations.

pub mod analyze;
pub mod profile;
pub mod quiz;
pub mod tips;

pub use self::analyze::execute_analyze;
pub use self::profile::execute_profile;
pub use self::quiz::execute_quiz;
pub use self::tips::execute_tips;
