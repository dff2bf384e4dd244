//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 MySQL、PostgreSQL 和 SQLite。

mod companies;
mod inquiries;
mod news;
mod price_trends;
mod products;
mod users;

use crate::config::AppConfig;
use crate::errors::{ArgoChainError, Result};
use crate::models::{PaginationInfo, PaginationQuery};
use crate::utils::escape_like_pattern;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::Expr;
use sea_orm::{
    Condition, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, FromQueryResult, PaginatorTrait, Select, SqlErr,
};
use std::time::Duration;
use tracing::info;

// 多语言文本中参与搜索的语言键
const MULTILINGUAL_KEYS: [&str; 3] = ["zh-CN", "en", "es"];

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建存储实例并运行迁移
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let storage = Self::connect(&config.database.url, config.database.pool_size).await?;

        Migrator::up(&storage.db, None)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成");
        Ok(storage)
    }

    /// 仅建立连接，不运行迁移
    pub async fn connect(url: &str, pool_size: u32) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, config.database.timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, config.database.timeout).await?
        };
        Ok(Self { db })
    }

    /// 使用已有连接（测试）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// 关闭连接池
    pub async fn close(self) -> Result<()> {
        self.db
            .close()
            .await
            .map_err(|e| ArgoChainError::database_connection(format!("关闭数据库连接失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ArgoChainError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ArgoChainError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（MySQL、PostgreSQL）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| ArgoChainError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        let url = url.trim();
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ArgoChainError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: mysql://, postgres://, sqlite://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 写入错误：唯一约束冲突映射为 Conflict
    pub(crate) fn write_error(context: &str, err: DbErr) -> ArgoChainError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                ArgoChainError::conflict(format!("{context}: {detail}"))
            }
            _ => ArgoChainError::database_operation(format!("{context}: {err}")),
        }
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }

    /// 多语言 JSON 列包含匹配（大小写不敏感），只比较各语言的取值
    pub(crate) fn multilingual_contains(&self, column: &str, keyword: &str) -> Condition {
        let pattern = format!("%{}%", escape_like_pattern(&keyword.trim().to_lowercase()));
        MULTILINGUAL_KEYS
            .iter()
            .fold(Condition::any(), |condition, key| {
                let sql = match self.backend() {
                    DbBackend::MySql => format!(
                        "LOWER(JSON_UNQUOTE(JSON_EXTRACT({column}, '$.\"{key}\"'))) LIKE ?"
                    ),
                    DbBackend::Postgres => {
                        format!("LOWER({column}::json ->> '{key}') LIKE ? ESCAPE '\\'")
                    }
                    _ => format!(
                        "LOWER(json_extract({column}, '$.\"{key}\"')) LIKE ? ESCAPE '\\'"
                    ),
                };
                condition.add(Expr::cust_with_values(sql, [pattern.clone()]))
            })
    }

    /// 分页查询
    pub(crate) async fn paginate<E>(
        &self,
        select: Select<E>,
        pagination: &PaginationQuery,
        what: &str,
    ) -> Result<(Vec<E::Model>, PaginationInfo)>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Send + Sync + 'static,
    {
        let paginator = select.paginate(&self.db, pagination.page_size());
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询{what}总数失败: {e}")))?;
        let items = paginator
            .fetch_page(pagination.page_index())
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询{what}列表失败: {e}")))?;

        Ok((items, PaginationInfo::new(pagination, total)))
    }
}

// Storage trait 实现
use crate::models::{
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn register_company_owner(
        &self,
        company: RegisterCompany,
        owner: CreateUserRequest,
    ) -> Result<(Company, User)> {
        self.register_company_owner_impl(company, owner).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user_profile(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Option<User>> {
        self.update_user_profile_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_password_by_email(&self, email: &str, password_hash: &str) -> Result<bool> {
        self.update_password_by_email_impl(email, password_hash)
            .await
    }

    async fn mark_email_verified(&self, email: &str) -> Result<bool> {
        self.mark_email_verified_impl(email).await
    }

    async fn count_platform_admins(&self) -> Result<u64> {
        self.count_platform_admins_impl().await
    }

    // 企业模块
    async fn get_company_by_id(&self, id: i64) -> Result<Option<Company>> {
        self.get_company_by_id_impl(id).await
    }

    async fn list_companies(
        &self,
        filter: CompanyListFilter,
        pagination: PaginationQuery,
    ) -> Result<PaginatedResponse<Company>> {
        self.list_companies_impl(filter, pagination).await
    }

    async fn list_suppliers(
        &self,
        query: SupplierLookupQuery,
    ) -> Result<PaginatedResponse<Company>> {
        self.list_suppliers_impl(query).await
    }

    async fn update_company_profile(
        &self,
        id: i64,
        update: UpdateCompanyRequest,
    ) -> Result<Option<Company>> {
        self.update_company_profile_impl(id, update).await
    }

    async fn update_company_status(&self, id: i64, status: CompanyStatus) -> Result<bool> {
        self.update_company_status_impl(id, status).await
    }

    // 产品模块
    async fn create_product(
        &self,
        supplier_id: i64,
        product: CreateProductRequest,
    ) -> Result<Product> {
        self.create_product_impl(supplier_id, product).await
    }

    async fn get_product_by_id(&self, id: i64) -> Result<Option<Product>> {
        self.get_product_by_id_impl(id).await
    }

    async fn list_products(&self, query: ProductLookupQuery) -> Result<PaginatedResponse<Product>> {
        self.list_products_impl(query).await
    }

    async fn count_listed_products(&self, supplier_id: i64) -> Result<u64> {
        self.count_listed_products_impl(supplier_id).await
    }

    // 询价模块
    async fn create_inquiry(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        self.create_inquiry_impl(inquiry).await
    }

    async fn get_inquiry_by_id(&self, id: i64) -> Result<Option<Inquiry>> {
        self.get_inquiry_by_id_impl(id).await
    }

    async fn list_buyer_inquiries(
        &self,
        buyer_id: i64,
        query: InquiryListQuery,
    ) -> Result<PaginatedResponse<Inquiry>> {
        self.list_buyer_inquiries_impl(buyer_id, query).await
    }

    async fn buyer_inquiry_stats(&self, buyer_id: i64) -> Result<BuyerInquiryStatsResponse> {
        self.buyer_inquiry_stats_impl(buyer_id).await
    }

    async fn list_inquiry_messages(
        &self,
        inquiry_id: i64,
        query: GetMessagesQuery,
    ) -> Result<PaginatedResponse<InquiryMessage>> {
        self.list_inquiry_messages_impl(inquiry_id, query).await
    }

    async fn create_inquiry_message(
        &self,
        inquiry_id: i64,
        sender_id: i64,
        message: &str,
    ) -> Result<InquiryMessage> {
        self.create_inquiry_message_impl(inquiry_id, sender_id, message)
            .await
    }

    // 资讯模块
    async fn list_published_news(&self, query: NewsListQuery) -> Result<PaginatedResponse<News>> {
        self.list_published_news_impl(query).await
    }

    async fn view_published_news(&self, id: i64) -> Result<Option<News>> {
        self.view_published_news_impl(id).await
    }

    async fn create_news(&self, news: CreateNewsRequest) -> Result<News> {
        self.create_news_impl(news).await
    }

    async fn set_news_published(
        &self,
        id: i64,
        publish: PublishNewsRequest,
    ) -> Result<Option<News>> {
        self.set_news_published_impl(id, publish.is_published).await
    }

    async fn soft_delete_news(&self, id: i64) -> Result<bool> {
        self.soft_delete_news_impl(id).await
    }

    // 价格走势模块
    async fn list_price_trends(
        &self,
        query: PriceTrendQuery,
    ) -> Result<PaginatedResponse<PriceTrend>> {
        self.list_price_trends_impl(query).await
    }

    async fn create_price_trend(&self, trend: CreatePriceTrendRequest) -> Result<PriceTrend> {
        self.create_price_trend_impl(trend).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;
    use crate::entity::companies::ActiveModel as CompanyActiveModel;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::{Company, CompanyStatus, CompanyType};
    use crate::models::products::requests::CreateProductRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

    /// 已迁移的内存 SQLite 存储
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage::from_connection(db)
    }

    /// 直接插入企业
    pub(crate) async fn insert_company(
        storage: &SeaOrmStorage,
        name: MultilingualText,
        company_type: CompanyType,
        status: CompanyStatus,
    ) -> Company {
        let now = chrono::Utc::now().timestamp();
        CompanyActiveModel {
            name: Set(name.to_value()),
            status: Set(status.as_str().to_string()),
            company_type: Set(company_type.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap()
        .into_company()
    }

    pub(crate) fn product(name: &str, is_listed: bool) -> CreateProductRequest {
        CreateProductRequest {
            name: MultilingualText::new(name),
            category: "herbicide".to_string(),
            formulation: Some("SL".to_string()),
            active_ingredient: Some("Glyphosate".to_string()),
            content: Some("41%".to_string()),
            description: None,
            is_listed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_inference() {
        assert_eq!(
            SeaOrmStorage::build_database_url("argochainhub.db").unwrap(),
            "sqlite://argochainhub.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("data/market.sqlite").unwrap(),
            "sqlite://data/market.sqlite?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("mysql://u:p@localhost/agro").unwrap(),
            "mysql://u:p@localhost/agro"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://localhost/agro").unwrap(),
            "postgres://localhost/agro"
        );
    }

    #[test]
    fn test_database_url_unknown_scheme() {
        let err = SeaOrmStorage::build_database_url("redis://localhost").unwrap_err();
        assert_eq!(err.code(), "E003");
    }
}
