// Application services
// Fetch inputs through the repository ports and hand them to the pure domain

pub mod errors;
pub mod top_scorers;

pub use errors::{ServiceError, ServiceResult};
pub use top_scorers::TopScorersService;
