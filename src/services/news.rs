use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    news::requests::{CreateNewsRequest, NewsListQuery, PublishNewsRequest},
};
use crate::storage::Storage;
use crate::utils::validate::Validate;

use super::{not_found, storage_error, storage_from_request, validation_error};

pub struct NewsService {
    storage: Option<Arc<dyn Storage>>,
}

impl NewsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_news(
        &self,
        query: NewsListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = query.validate() {
            return Ok(validation_error(errors));
        }
        let storage = self.get_storage(request)?;
        match storage.list_published_news(query).await {
            Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                page,
                "News retrieved successfully",
            ))),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to list news",
                e,
            )),
        }
    }

    /// 读取详情并计入一次浏览
    pub async fn get_news(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.view_published_news(id).await {
            Ok(Some(news)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                news,
                "News retrieved successfully",
            ))),
            Ok(None) => Ok(not_found(ErrorCode::NewsNotFound, "News not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to load news",
                e,
            )),
        }
    }

    pub async fn create_news(
        &self,
        news: CreateNewsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if let Err(errors) = news.validate() {
            return Ok(validation_error(errors));
        }
        let storage = self.get_storage(request)?;
        match storage.create_news(news).await {
            Ok(news) => {
                tracing::info!("News {} created (published: {})", news.id, news.is_published);
                Ok(HttpResponse::Created().json(ApiResponse::success(
                    news,
                    "News created successfully",
                )))
            }
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to create news",
                e,
            )),
        }
    }

    pub async fn set_published(
        &self,
        id: i64,
        publish: PublishNewsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.set_news_published(id, publish).await {
            Ok(Some(news)) => {
                tracing::info!("News {} published: {}", news.id, news.is_published);
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    news,
                    "News updated successfully",
                )))
            }
            Ok(None) => Ok(not_found(ErrorCode::NewsNotFound, "News not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to update news",
                e,
            )),
        }
    }

    pub async fn delete_news(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        match storage.soft_delete_news(id).await {
            Ok(true) => {
                tracing::info!("News {} soft deleted", id);
                Ok(HttpResponse::Ok().json(ApiResponse::success_empty("News deleted successfully")))
            }
            Ok(false) => Ok(not_found(ErrorCode::NewsNotFound, "News not found")),
            Err(e) => Ok(storage_error(
                ErrorCode::InternalServerError,
                "Failed to delete news",
                e,
            )),
        }
    }
}
