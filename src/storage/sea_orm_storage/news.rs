use super::SeaOrmStorage;
use crate::entity::news::{ActiveModel, Column, Entity as NewsEntity};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    common::PaginatedResponse,
    news::{
        entities::News,
        requests::{CreateNewsRequest, NewsListQuery},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

/// 已发布且未删除
fn visible() -> Condition {
    Condition::all()
        .add(Column::IsPublished.eq(true))
        .add(Column::DeletedAt.is_null())
}

impl SeaOrmStorage {
    /// 已发布资讯列表
    pub async fn list_published_news_impl(
        &self,
        query: NewsListQuery,
    ) -> Result<PaginatedResponse<News>> {
        let mut select = NewsEntity::find().filter(visible());
        if let Some(category) = query.category.as_deref()
            && !category.trim().is_empty()
        {
            select = select.filter(Column::Category.eq(category.trim()));
        }

        let select = select
            .order_by_desc(Column::SortOrder)
            .order_by_desc(Column::PublishedAt)
            .order_by_desc(Column::Id);
        let (items, pagination) = self.paginate(select, &query.pagination, "资讯").await?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_news()).collect(),
            pagination,
        })
    }

    /// 查看资讯并累加浏览量
    pub async fn view_published_news_impl(&self, id: i64) -> Result<Option<News>> {
        let result = NewsEntity::update_many()
            .col_expr(Column::ViewCount, Expr::cust("view_count + 1"))
            .filter(Column::Id.eq(id))
            .filter(visible())
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新浏览量失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let news = NewsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询资讯失败: {e}")))?;

        Ok(news.map(|m| m.into_news()))
    }

    /// 创建资讯
    pub async fn create_news_impl(&self, req: CreateNewsRequest) -> Result<News> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title.to_value()),
            content: Set(req.content.to_value()),
            category: Set(req.category.trim().to_string()),
            is_published: Set(req.is_published),
            published_at: Set(req.is_published.then_some(now)),
            sort_order: Set(req.sort_order),
            view_count: Set(0),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("创建资讯失败: {e}")))?;

        Ok(result.into_news())
    }

    /// 发布或撤回资讯，首次发布时记录发布时间
    pub async fn set_news_published_impl(&self, id: i64, published: bool) -> Result<Option<News>> {
        let now = chrono::Utc::now().timestamp();
        let mut update = NewsEntity::update_many()
            .col_expr(Column::IsPublished, Expr::value(published))
            .col_expr(Column::UpdatedAt, Expr::value(now));
        if published {
            update = update.col_expr(
                Column::PublishedAt,
                Expr::cust_with_values("COALESCE(published_at, ?)", [now]),
            );
        }
        let result = update
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新发布状态失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let news = NewsEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询资讯失败: {e}")))?;

        Ok(news.map(|m| m.into_news()))
    }

    /// 软删除资讯
    pub async fn soft_delete_news_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = NewsEntity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("删除资讯失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
