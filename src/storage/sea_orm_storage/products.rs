use super::SeaOrmStorage;
use crate::entity::products::{ActiveModel, Column, Entity as Products};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    common::PaginatedResponse,
    products::{
        entities::Product,
        requests::{CreateProductRequest, ProductLookupQuery},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建产品
    pub async fn create_product_impl(
        &self,
        supplier_id: i64,
        req: CreateProductRequest,
    ) -> Result<Product> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            supplier_id: Set(supplier_id),
            name: Set(req.name.to_value()),
            category: Set(req.category.trim().to_string()),
            formulation: Set(req.formulation),
            active_ingredient: Set(req.active_ingredient),
            content: Set(req.content),
            description: Set(req.description),
            is_listed: Set(req.is_listed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("创建产品失败: {e}")))?;

        Ok(result.into_product())
    }

    /// 通过 ID 获取产品
    pub async fn get_product_by_id_impl(&self, id: i64) -> Result<Option<Product>> {
        let result = Products::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询产品失败: {e}")))?;

        Ok(result.map(|m| m.into_product()))
    }

    /// 分页列出上架产品
    pub async fn list_products_impl(
        &self,
        query: ProductLookupQuery,
    ) -> Result<PaginatedResponse<Product>> {
        let mut select = Products::find().filter(Column::IsListed.eq(true));

        if let Some(supplier_id) = query.supplier_id {
            select = select.filter(Column::SupplierId.eq(supplier_id));
        }

        // 名称（各语言）或有效成分
        if let Some(search) = query.search.as_deref()
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(self.multilingual_contains("name", search))
                    .add(Column::ActiveIngredient.contains(&escaped)),
            );
        }

        let select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);
        let (items, pagination) = self.paginate(select, &query.pagination, "产品").await?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_product()).collect(),
            pagination,
        })
    }

    /// 供应商上架产品数
    pub async fn count_listed_products_impl(&self, supplier_id: i64) -> Result<u64> {
        Products::find()
            .filter(Column::SupplierId.eq(supplier_id))
            .filter(Column::IsListed.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("统计产品数失败: {e}")))
    }
}
