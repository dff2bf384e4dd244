use super::SeaOrmStorage;
use crate::entity::inquiries::{ActiveModel, Column, Entity as Inquiries};
use crate::entity::inquiry_messages::{
    ActiveModel as MessageActiveModel, Column as MessageColumn, Entity as InquiryMessages,
};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    common::PaginatedResponse,
    inquiries::{
        entities::{Inquiry, InquiryMessage, InquiryStatus},
        requests::{GetMessagesQuery, InquiryListQuery, NewInquiry},
        responses::BuyerInquiryStatsResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建询价，初始状态为待报价
    pub async fn create_inquiry_impl(&self, inquiry: NewInquiry) -> Result<Inquiry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            inquiry_no: Set(inquiry.inquiry_no),
            buyer_id: Set(inquiry.buyer_id),
            supplier_id: Set(inquiry.supplier_id),
            product_id: Set(inquiry.product_id),
            status: Set(InquiryStatus::PendingQuote.as_str().to_string()),
            details: Set(serde_json::to_value(&inquiry.details)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("创建询价失败: {e}")))?;

        result.into_inquiry()
    }

    /// 通过 ID 获取询价
    pub async fn get_inquiry_by_id_impl(&self, id: i64) -> Result<Option<Inquiry>> {
        let result = Inquiries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询询价失败: {e}")))?;

        result.map(|m| m.into_inquiry()).transpose()
    }

    /// 采购方询价列表
    pub async fn list_buyer_inquiries_impl(
        &self,
        buyer_id: i64,
        query: InquiryListQuery,
    ) -> Result<PaginatedResponse<Inquiry>> {
        let mut select = Inquiries::find().filter(Column::BuyerId.eq(buyer_id));
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);
        let (items, pagination) = self.paginate(select, &query.pagination, "询价").await?;

        // 无法解析的行跳过，不影响整页
        let items = items
            .into_iter()
            .filter_map(|m| {
                let id = m.id;
                m.into_inquiry()
                    .map_err(|e| warn!("Skipping inquiry {id}: {e}"))
                    .ok()
            })
            .collect();

        Ok(PaginatedResponse { items, pagination })
    }

    /// 按状态分组统计采购方询价
    pub async fn buyer_inquiry_stats_impl(&self, buyer_id: i64) -> Result<BuyerInquiryStatsResponse> {
        let rows: Vec<(String, i64)> = Inquiries::find()
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .filter(Column::BuyerId.eq(buyer_id))
            .group_by(Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("统计询价失败: {e}")))?;

        Ok(BuyerInquiryStatsResponse::from_counts(rows))
    }

    /// 询价消息，`desc` 为真时最新在前
    pub async fn list_inquiry_messages_impl(
        &self,
        inquiry_id: i64,
        query: GetMessagesQuery,
    ) -> Result<PaginatedResponse<InquiryMessage>> {
        let order = if query.desc { Order::Desc } else { Order::Asc };
        let select = InquiryMessages::find()
            .filter(MessageColumn::InquiryId.eq(inquiry_id))
            .order_by(MessageColumn::CreatedAt, order.clone())
            .order_by(MessageColumn::Id, order);

        let (items, pagination) = self.paginate(select, &query.pagination, "询价消息").await?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_message()).collect(),
            pagination,
        })
    }

    /// 发送询价消息
    pub async fn create_inquiry_message_impl(
        &self,
        inquiry_id: i64,
        sender_id: i64,
        message: &str,
    ) -> Result<InquiryMessage> {
        let now = chrono::Utc::now().timestamp();

        let model = MessageActiveModel {
            inquiry_id: Set(inquiry_id),
            sender_id: Set(sender_id),
            message: Set(message.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("发送消息失败: {e}")))?;

        Ok(result.into_message())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{insert_company, memory_storage, product};
    use super::*;
    use crate::entity::inquiries::Entity as InquiryRows;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::{CompanyStatus, CompanyType};
    use crate::models::inquiries::entities::{InquiryDetails, SupplierPriority};
    use crate::models::users::entities::{UserRole, UserType};
    use crate::models::users::requests::CreateUserRequest;
    use crate::models::{PaginationQuery, common::PaginatedResponse as Page};
    use sea_orm::sea_query::Expr;

    struct Parties {
        buyer_id: i64,
        supplier_id: i64,
        product_id: i64,
        user_id: i64,
    }

    async fn parties(storage: &SeaOrmStorage) -> Parties {
        let buyer = insert_company(
            storage,
            MultilingualText::new("采购公司"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;
        let supplier = insert_company(
            storage,
            MultilingualText::new("绿源农化"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;
        let product = storage
            .create_product_impl(supplier.id, product("草甘膦", true))
            .await
            .unwrap();
        let user = storage
            .create_user_impl(CreateUserRequest {
                email: "buyer@agro.test".to_string(),
                password_hash: "hash".to_string(),
                name: "采购员".to_string(),
                role: UserRole::Member,
                user_type: UserType::CompanyMember,
                company_id: Some(buyer.id),
                phone: None,
                email_verified: true,
            })
            .await
            .unwrap();

        Parties {
            buyer_id: buyer.id,
            supplier_id: supplier.id,
            product_id: product.id,
            user_id: user.id,
        }
    }

    fn new_inquiry(p: &Parties, no: &str) -> NewInquiry {
        NewInquiry {
            inquiry_no: no.to_string(),
            buyer_id: p.buyer_id,
            supplier_id: p.supplier_id,
            product_id: p.product_id,
            details: InquiryDetails::new(20.0, "ton"),
        }
    }

    #[tokio::test]
    async fn test_create_inquiry_starts_pending() {
        let storage = memory_storage().await;
        let p = parties(&storage).await;

        let inquiry = storage
            .create_inquiry_impl(new_inquiry(&p, "INQ2025060100000001"))
            .await
            .unwrap();
        assert_eq!(inquiry.status, InquiryStatus::PendingQuote);
        assert_eq!(inquiry.details.supplier_priority, SupplierPriority::Normal);

        let loaded = storage
            .get_inquiry_by_id_impl(inquiry.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.inquiry_no, "INQ2025060100000001");
        assert!(loaded.involves_company(p.supplier_id));
    }

    #[tokio::test]
    async fn test_buyer_stats_grouped() {
        let storage = memory_storage().await;
        let p = parties(&storage).await;

        for idx in 0..4 {
            storage
                .create_inquiry_impl(new_inquiry(&p, &format!("INQ-{idx}")))
                .await
                .unwrap();
        }
        InquiryRows::update_many()
            .col_expr(Column::Status, Expr::value("quoted"))
            .filter(Column::InquiryNo.is_in(["INQ-0", "INQ-1"]))
            .exec(&storage.db)
            .await
            .unwrap();
        InquiryRows::update_many()
            .col_expr(Column::Status, Expr::value("archived"))
            .filter(Column::InquiryNo.eq("INQ-2"))
            .exec(&storage.db)
            .await
            .unwrap();

        let stats = storage.buyer_inquiry_stats_impl(p.buyer_id).await.unwrap();
        assert_eq!(stats.quoted, 2);
        assert_eq!(stats.pending_quote, 1);
        assert_eq!(stats.confirmed, 0);
        assert_eq!(stats.total, 4);

        let empty = storage.buyer_inquiry_stats_impl(p.supplier_id).await.unwrap();
        assert_eq!(empty.total, 0);
    }

    #[tokio::test]
    async fn test_list_buyer_inquiries_with_status() {
        let storage = memory_storage().await;
        let p = parties(&storage).await;
        storage
            .create_inquiry_impl(new_inquiry(&p, "INQ-A"))
            .await
            .unwrap();

        let all = storage
            .list_buyer_inquiries_impl(
                p.buyer_id,
                InquiryListQuery {
                    status: None,
                    pagination: PaginationQuery::default(),
                },
            )
            .await
            .unwrap();
        assert_eq!(all.items.len(), 1);

        let quoted = storage
            .list_buyer_inquiries_impl(
                p.buyer_id,
                InquiryListQuery {
                    status: Some(InquiryStatus::Quoted),
                    pagination: PaginationQuery::default(),
                },
            )
            .await
            .unwrap();
        assert!(quoted.items.is_empty());
    }

    async fn insert_raw_inquiry(
        storage: &SeaOrmStorage,
        p: &Parties,
        no: &str,
        details: serde_json::Value,
    ) {
        let now = chrono::Utc::now().timestamp();
        ActiveModel {
            inquiry_no: Set(no.to_string()),
            buyer_id: Set(p.buyer_id),
            supplier_id: Set(p.supplier_id),
            product_id: Set(p.product_id),
            status: Set("pending_quote".to_string()),
            details: Set(details),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_list_tolerates_legacy_details() {
        let storage = memory_storage().await;
        let p = parties(&storage).await;
        insert_raw_inquiry(
            &storage,
            &p,
            "INQ-LEGACY",
            serde_json::json!({"supplierPriority": "normal"}),
        )
        .await;
        insert_raw_inquiry(
            &storage,
            &p,
            "INQ-FUTURE",
            serde_json::json!({"version": 9, "quantity": 1, "unit": "kg"}),
        )
        .await;

        let page = storage
            .list_buyer_inquiries_impl(
                p.buyer_id,
                InquiryListQuery {
                    status: None,
                    pagination: PaginationQuery::default(),
                },
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].inquiry_no, "INQ-LEGACY");
        assert_eq!(page.items[0].details.supplier_priority, SupplierPriority::Normal);

        let stats = storage.buyer_inquiry_stats_impl(p.buyer_id).await.unwrap();
        assert_eq!(stats.total, 2);
    }

    #[tokio::test]
    async fn test_message_ordering() {
        let storage = memory_storage().await;
        let p = parties(&storage).await;
        let inquiry = storage
            .create_inquiry_impl(new_inquiry(&p, "INQ-M"))
            .await
            .unwrap();

        for text in ["第一条", "第二条", "第三条"] {
            storage
                .create_inquiry_message_impl(inquiry.id, p.user_id, text)
                .await
                .unwrap();
        }

        let texts = |page: Page<InquiryMessage>| {
            page.items
                .into_iter()
                .map(|m| m.message)
                .collect::<Vec<_>>()
        };

        let newest_first = storage
            .list_inquiry_messages_impl(inquiry.id, GetMessagesQuery::default())
            .await
            .unwrap();
        assert_eq!(texts(newest_first), vec!["第三条", "第二条", "第一条"]);

        let oldest_first = storage
            .list_inquiry_messages_impl(
                inquiry.id,
                GetMessagesQuery {
                    desc: false,
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(texts(oldest_first), vec!["第一条", "第二条", "第三条"]);
    }
}
