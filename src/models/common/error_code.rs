use serde::Serialize;

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    Unauthorized = 1001,
    ValidationFailed = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    RateLimitExceeded = 1029,

    // 认证与用户
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNotFound = 2010,
    UserAlreadyExists = 2011,
    UserEmailInvalid = 2012,
    UserPasswordInvalid = 2013,

    // 企业
    CompanyNotFound = 3000,
    CompanyUpdateFailed = 3001,

    // 产品
    ProductNotFound = 4000,
    ProductCreationFailed = 4001,

    // 询价
    InquiryNotFound = 5000,
    InquiryCreationFailed = 5001,
    MessageSendFailed = 5002,

    // 资讯
    NewsNotFound = 6000,

    // 价格走势
    PriceTrendCreationFailed = 7000,
}
