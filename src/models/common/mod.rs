pub mod deserialize;
pub mod error_code;
pub mod multilingual;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use multilingual::{LanguageQuery, MultilingualText};
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
