use super::SeaOrmStorage;
use crate::entity::companies::{ActiveModel, Column, Entity as Companies};
use crate::errors::{ArgoChainError, Result};
use crate::models::{
    PaginationQuery,
    common::PaginatedResponse,
    companies::{
        entities::{Company, CompanyStatus, CompanyType},
        requests::{CompanyListFilter, SupplierLookupQuery, UpdateCompanyRequest},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过 ID 获取企业
    pub async fn get_company_by_id_impl(&self, id: i64) -> Result<Option<Company>> {
        let result = Companies::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询企业失败: {e}")))?;

        Ok(result.map(|m| m.into_company()))
    }

    /// 管理端分页列出企业
    pub async fn list_companies_impl(
        &self,
        filter: CompanyListFilter,
        pagination: PaginationQuery,
    ) -> Result<PaginatedResponse<Company>> {
        let mut select = Companies::find();

        if let Some(status) = filter.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }
        if let Some(company_type) = filter.company_type {
            select = select.filter(Column::CompanyType.eq(company_type.as_str()));
        }
        if let Some(search) = filter.search.as_deref()
            && !search.trim().is_empty()
        {
            select = select.filter(self.multilingual_contains("name", search));
        }

        let select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);
        let (items, pagination) = self.paginate(select, &pagination, "企业").await?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_company()).collect(),
            pagination,
        })
    }

    /// 已激活的供应商
    pub async fn list_suppliers_impl(
        &self,
        query: SupplierLookupQuery,
    ) -> Result<PaginatedResponse<Company>> {
        self.list_companies_impl(
            CompanyListFilter {
                status: Some(CompanyStatus::Active),
                company_type: Some(CompanyType::Supplier),
                search: query.search,
            },
            query.pagination,
        )
        .await
    }

    /// 更新企业资料
    pub async fn update_company_profile_impl(
        &self,
        id: i64,
        update: UpdateCompanyRequest,
    ) -> Result<Option<Company>> {
        let Some(existing) = Companies::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("查询企业失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name.to_value());
        }
        if let Some(country) = update.country {
            model.country = Set(Some(country));
        }
        if let Some(categories) = update.business_categories {
            model.business_categories = Set(Some(serde_json::to_value(categories)?));
        }
        if let Some(size) = update.company_size {
            model.company_size = Set(Some(size.as_str().to_string()));
        }
        if let Some(documents) = update.license_documents {
            model.license_documents = Set(Some(serde_json::to_value(documents)?));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新企业失败: {e}")))?;

        Ok(Some(result.into_company()))
    }

    /// 修改企业状态，返回是否命中
    pub async fn update_company_status_impl(&self, id: i64, status: CompanyStatus) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = Companies::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ArgoChainError::database_operation(format!("更新企业状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::super::test_support::insert_company;
    use super::*;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::{CompanySize, LicenseDocument};

    #[tokio::test]
    async fn test_list_suppliers_only_active_suppliers() {
        let storage = memory_storage().await;
        let active = insert_company(
            &storage,
            MultilingualText::new("绿源农化").with_en("Greenfield Agro"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;
        insert_company(
            &storage,
            MultilingualText::new("待审核供应商"),
            CompanyType::Supplier,
            CompanyStatus::Pending,
        )
        .await;
        insert_company(
            &storage,
            MultilingualText::new("采购公司"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;

        let page = storage
            .list_suppliers_impl(SupplierLookupQuery::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.items[0].id, active.id);
    }

    #[tokio::test]
    async fn test_supplier_search_matches_any_language() {
        let storage = memory_storage().await;
        insert_company(
            &storage,
            MultilingualText::new("绿源农化").with_en("Greenfield Agro"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;
        insert_company(
            &storage,
            MultilingualText::new("丰收化工").with_en("Harvest Chem"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;

        let by_en = storage
            .list_suppliers_impl(SupplierLookupQuery {
                search: Some("greenfield".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_en.items.len(), 1);
        assert_eq!(by_en.items[0].name.zh_cn, "绿源农化");

        // 通配符按字面匹配
        let wildcard = storage
            .list_suppliers_impl(SupplierLookupQuery {
                search: Some("%".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(wildcard.items.is_empty());
    }

    #[tokio::test]
    async fn test_supplier_search_ignores_json_keys() {
        let storage = memory_storage().await;
        insert_company(
            &storage,
            MultilingualText::new("绿源农化").with_en("Greenfield Agro"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;

        for keyword in ["zh", "cn", "\"", ":", "{"] {
            let page = storage
                .list_suppliers_impl(SupplierLookupQuery {
                    search: Some(keyword.to_string()),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert!(page.items.is_empty(), "keyword {keyword:?} matched");
        }

        let by_zh = storage
            .list_suppliers_impl(SupplierLookupQuery {
                search: Some("绿源".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_zh.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_suppliers_pagination() {
        let storage = memory_storage().await;
        for idx in 0..3 {
            insert_company(
                &storage,
                MultilingualText::new(format!("供应商{idx}")),
                CompanyType::Supplier,
                CompanyStatus::Active,
            )
            .await;
        }

        let page = storage
            .list_suppliers_impl(SupplierLookupQuery {
                pagination: PaginationQuery::new(2, 2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_update_profile_and_status() {
        let storage = memory_storage().await;
        let company = insert_company(
            &storage,
            MultilingualText::new("绿源农化"),
            CompanyType::Supplier,
            CompanyStatus::Pending,
        )
        .await;

        let updated = storage
            .update_company_profile_impl(
                company.id,
                UpdateCompanyRequest {
                    country: Some("CN".to_string()),
                    business_categories: Some(vec!["herbicide".to_string()]),
                    company_size: Some(CompanySize::Medium),
                    license_documents: Some(vec![LicenseDocument {
                        name: "农药经营许可证".to_string(),
                        url: "https://files.agro.test/license.pdf".to_string(),
                    }]),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.profile.country.as_deref(), Some("CN"));
        assert_eq!(updated.profile.business_categories, vec!["herbicide"]);
        assert_eq!(updated.profile.company_size, Some(CompanySize::Medium));
        assert_eq!(updated.profile.license_documents.len(), 1);

        assert!(
            storage
                .update_company_status_impl(company.id, CompanyStatus::Active)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .update_company_status_impl(9999, CompanyStatus::Active)
                .await
                .unwrap()
        );
        let reloaded = storage
            .get_company_by_id_impl(company.id)
            .await
            .unwrap()
            .unwrap();
        assert!(reloaded.is_active());
    }

    #[tokio::test]
    async fn test_admin_filters() {
        let storage = memory_storage().await;
        insert_company(
            &storage,
            MultilingualText::new("甲"),
            CompanyType::Buyer,
            CompanyStatus::Pending,
        )
        .await;
        insert_company(
            &storage,
            MultilingualText::new("乙"),
            CompanyType::Supplier,
            CompanyStatus::Pending,
        )
        .await;

        let pending_buyers = storage
            .list_companies_impl(
                CompanyListFilter {
                    status: Some(CompanyStatus::Pending),
                    company_type: Some(CompanyType::Buyer),
                    search: None,
                },
                PaginationQuery::default(),
            )
            .await
            .unwrap();
        assert_eq!(pending_buyers.items.len(), 1);
        assert_eq!(pending_buyers.items[0].name.zh_cn, "甲");
    }
}
