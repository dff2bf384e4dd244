/*!
 * 企业身份中间件
 *
 * 在 `RequireJWT` 之后运行：加载当前用户所属企业，依次检查
 * 是否关联企业、企业是否已激活、企业类型是否允许。
 * 通过后将 `Company` 放入请求扩展，失败时返回 403 和对应的 `AuthErrorCode`。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest, ResponseError,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{error, info};

use super::create_error_response;
use crate::middlewares::RequireJWT;
use crate::models::{
    ErrorCode,
    auth::{CompanyAccessError, check_company_access},
    companies::entities::{Company, CompanyType},
};
use crate::storage::Storage;

#[derive(Clone)]
pub struct RequireCompany {
    allowed_types: Vec<CompanyType>,
}

impl RequireCompany {
    /// 任意类型的已激活企业
    pub fn any() -> Self {
        Self {
            allowed_types: Vec::new(),
        }
    }

    pub fn buyer() -> Self {
        Self {
            allowed_types: vec![CompanyType::Buyer],
        }
    }

    pub fn supplier() -> Self {
        Self {
            allowed_types: vec![CompanyType::Supplier],
        }
    }

    /// 当前企业（需在 RequireCompany 之后调用）
    pub fn extract_company(req: &HttpRequest) -> Option<Company> {
        req.extensions().get::<Company>().cloned()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireCompany
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireCompanyMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireCompanyMiddleware {
            service: Rc::new(service),
            allowed_types: self.allowed_types.clone(),
        }))
    }
}

pub struct RequireCompanyMiddleware<S> {
    service: Rc<S>,
    allowed_types: Vec<CompanyType>,
}

impl<S, B> Service<ServiceRequest> for RequireCompanyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let allowed_types = self.allowed_types.clone();

        Box::pin(async move {
            let Some(user) = RequireJWT::extract_user(req.request()) else {
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            let company = match user.company_id {
                Some(company_id) => {
                    let storage = req
                        .app_data::<web::Data<Arc<dyn Storage>>>()
                        .map(|data| data.get_ref().clone());
                    let lookup = match storage {
                        Some(storage) => storage.get_company_by_id(company_id).await,
                        None => Err(crate::errors::ArgoChainError::database_connection(
                            "Storage not registered in app data",
                        )),
                    };
                    match lookup {
                        Ok(company) => company,
                        Err(e) => {
                            error!("Failed to load company {}: {}", company_id, e);
                            return Ok(req.into_response(
                                create_error_response(
                                    StatusCode::INTERNAL_SERVER_ERROR,
                                    ErrorCode::InternalServerError,
                                    "Failed to load company",
                                )
                                .map_into_right_body(),
                            ));
                        }
                    }
                }
                None => None,
            };

            if let Err(code) = check_company_access(&user, company.as_ref(), &allowed_types) {
                info!(
                    "Company access denied for user {} on {}: {}",
                    user.id,
                    req.path(),
                    code.as_str()
                );
                return Ok(req.into_response(
                    CompanyAccessError(code)
                        .error_response()
                        .map_into_right_body(),
                ));
            }

            if let Some(company) = company {
                req.extensions_mut().insert(company);
            }
            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::MultilingualText;
    use crate::models::companies::entities::CompanyStatus;
    use crate::models::users::entities::{User, UserProfile, UserRole, UserStatus, UserType};
    use crate::storage::sea_orm_storage::test_support::{insert_company, memory_storage};
    use actix_web::{App, HttpResponse, dev::Service as _, test};

    fn member_of(company_id: Option<i64>) -> User {
        let now = chrono::Utc::now();
        User {
            id: 7,
            email: "member@agro.test".into(),
            password_hash: String::new(),
            name: "成员".into(),
            role: UserRole::Member,
            user_type: UserType::CompanyMember,
            company_id,
            profile: UserProfile::default(),
            email_verified: true,
            status: UserStatus::Active,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    async fn company_name(req: HttpRequest) -> HttpResponse {
        let company = RequireCompany::extract_company(&req).map(|c| c.name.zh_cn);
        HttpResponse::Ok().body(company.unwrap_or_default())
    }

    async fn call(
        storage: Arc<dyn Storage>,
        guard: RequireCompany,
        user: User,
    ) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new().app_data(web::Data::new(storage)).service(
                web::scope("/guarded")
                    .wrap(guard)
                    .wrap_fn(move |req, srv| {
                        req.extensions_mut().insert(user.clone());
                        srv.call(req)
                    })
                    .route("", web::get().to(company_name)),
            ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/guarded").to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let json = serde_json::from_slice(&body)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into()));
        (status, json)
    }

    #[actix_web::test]
    async fn test_active_buyer_passes() {
        let storage = memory_storage().await;
        let buyer = insert_company(
            &storage,
            MultilingualText::new("采购公司"),
            CompanyType::Buyer,
            CompanyStatus::Active,
        )
        .await;

        let (status, body) = call(
            Arc::new(storage),
            RequireCompany::buyer(),
            member_of(Some(buyer.id)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::Value::String("采购公司".into()));
    }

    #[actix_web::test]
    async fn test_denials_use_auth_error_codes() {
        let storage = memory_storage().await;
        let pending = insert_company(
            &storage,
            MultilingualText::new("待审核"),
            CompanyType::Buyer,
            CompanyStatus::Pending,
        )
        .await;
        let supplier = insert_company(
            &storage,
            MultilingualText::new("供应商"),
            CompanyType::Supplier,
            CompanyStatus::Active,
        )
        .await;
        let storage: Arc<dyn Storage> = Arc::new(storage);

        let cases = [
            (member_of(None), "COMPANY_NOT_ASSOCIATED"),
            (member_of(Some(9999)), "COMPANY_NOT_ASSOCIATED"),
            (member_of(Some(pending.id)), "COMPANY_NOT_ACTIVE"),
            (member_of(Some(supplier.id)), "INVALID_COMPANY_TYPE"),
        ];
        for (user, expected) in cases {
            let (status, body) = call(storage.clone(), RequireCompany::buyer(), user).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["statusCode"], 403);
            assert_eq!(body["code"], expected);
        }
    }
}
