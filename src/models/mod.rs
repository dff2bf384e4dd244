pub mod common;

pub mod auth {
    pub mod access;
    pub mod requests;
    pub mod responses;

    pub use access::{AuthErrorCode, CompanyAccessError, check_company_access};
    pub use requests::{LoginRequest, RegisterRequest};
    pub use responses::{LoginResponse, RefreshTokenResponse, UserInfoResponse};
}

pub mod users {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod companies {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod products {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod inquiries {
    pub mod entities;
    pub mod requests;
    pub mod responses;
}

pub mod news {
    pub mod entities;
    pub mod requests;
}

pub mod price_trends {
    pub mod entities;
    pub mod requests;
}

pub use common::{ApiResponse, ErrorCode, PaginationInfo, PaginationQuery};

/// 服务启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
