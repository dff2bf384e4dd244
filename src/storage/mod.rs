use std::sync::Arc;

use crate::models::{
    PaginationQuery,
    auth::requests::RegisterCompany,
    common::PaginatedResponse,
    companies::{
        entities::{Company, CompanyStatus},
        requests::{CompanyListFilter, SupplierLookupQuery, UpdateCompanyRequest},
    },
    inquiries::{
        entities::{Inquiry, InquiryMessage},
        requests::{GetMessagesQuery, InquiryListQuery, NewInquiry},
        responses::BuyerInquiryStatsResponse,
    },
    news::{
        entities::News,
        requests::{CreateNewsRequest, NewsListQuery, PublishNewsRequest},
    },
    price_trends::{
        entities::PriceTrend,
        requests::{CreatePriceTrendRequest, PriceTrendQuery},
    },
    products::{
        entities::Product,
        requests::{CreateProductRequest, ProductLookupQuery},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateProfileRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 在同一事务中创建待审核企业及其所有者
    async fn register_company_owner(
        &self,
        company: RegisterCompany,
        owner: CreateUserRequest,
    ) -> Result<(Company, User)>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新个人资料
    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 按邮箱重置密码哈希
    async fn update_password_by_email(&self, email: &str, password_hash: &str) -> Result<bool>;
    // 按邮箱标记邮箱已验证
    async fn mark_email_verified(&self, email: &str) -> Result<bool>;
    // 平台管理员数量
    async fn count_platform_admins(&self) -> Result<u64>;

    /// 企业管理方法
    async fn get_company_by_id(&self, id: i64) -> Result<Option<Company>>;
    async fn list_companies(
        &self,
        filter: CompanyListFilter,
        pagination: PaginationQuery,
    ) -> Result<PaginatedResponse<Company>>;
    // 仅返回已激活的供应商
    async fn list_suppliers(&self, query: SupplierLookupQuery)
    -> Result<PaginatedResponse<Company>>;
    async fn update_company_profile(
        &self,
        id: i64,
        update: UpdateCompanyRequest,
    ) -> Result<Option<Company>>;
    async fn update_company_status(&self, id: i64, status: CompanyStatus) -> Result<bool>;

    /// 产品管理方法
    async fn create_product(&self, supplier_id: i64, product: CreateProductRequest)
    -> Result<Product>;
    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>>;
    // 仅返回已上架产品
    async fn list_products(&self, query: ProductLookupQuery) -> Result<PaginatedResponse<Product>>;
    async fn count_listed_products(&self, supplier_id: i64) -> Result<u64>;

    /// 询价管理方法
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry>;
    async fn get_inquiry_by_id(&self, id: i64) -> Result<Option<Inquiry>>;
    async fn list_buyer_inquiries(
        &self,
        buyer_id: i64,
        query: InquiryListQuery,
    ) -> Result<PaginatedResponse<Inquiry>>;
    async fn buyer_inquiry_stats(&self, buyer_id: i64) -> Result<BuyerInquiryStatsResponse>;
    async fn list_inquiry_messages(
        &self,
        inquiry_id: i64,
        query: GetMessagesQuery,
    ) -> Result<PaginatedResponse<InquiryMessage>>;
    async fn create_inquiry_message(
        &self,
        inquiry_id: i64,
        sender_id: i64,
        message: &str,
    ) -> Result<InquiryMessage>;

    /// 资讯管理方法
    async fn list_published_news(&self, query: NewsListQuery) -> Result<PaginatedResponse<News>>;
    // 读取已发布资讯并增加浏览次数
    async fn view_published_news(&self, id: i64) -> Result<Option<News>>;
    async fn create_news(&self, news: CreateNewsRequest) -> Result<News>;
    async fn set_news_published(
        &self,
        id: i64,
        publish: PublishNewsRequest,
    ) -> Result<Option<News>>;
    async fn soft_delete_news(&self, id: i64) -> Result<bool>;

    /// 价格走势方法
    async fn list_price_trends(&self, query: PriceTrendQuery)
    -> Result<PaginatedResponse<PriceTrend>>;
    async fn create_price_trend(&self, trend: CreatePriceTrendRequest) -> Result<PriceTrend>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
