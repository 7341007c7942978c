use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::session::use_cases::accept_suggestion::{
    AcceptSuggestionParams, AcceptSuggestionUseCase,
};
use business::domain::session::use_cases::add_item::{AddBasketItemParams, AddBasketItemUseCase};
use business::domain::session::use_cases::get_snapshot::GetSessionSnapshotUseCase;
use business::domain::session::use_cases::remove_basket_item::{
    RemoveBasketItemParams, RemoveBasketItemUseCase,
};
use business::domain::session::use_cases::remove_suggestion::{
    RemoveSuggestionParams, RemoveSuggestionUseCase,
};
use business::domain::session::use_cases::set_query::{SetQueryParams, SetQueryUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{
    AddBasketItemRequest, IdentifierKindDto, SessionResponse, SetQueryRequest, SyncResponse,
    parse_identifier,
};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    get_snapshot_use_case: Arc<dyn GetSessionSnapshotUseCase>,
    add_item_use_case: Arc<dyn AddBasketItemUseCase>,
    accept_suggestion_use_case: Arc<dyn AcceptSuggestionUseCase>,
    remove_basket_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
    remove_suggestion_use_case: Arc<dyn RemoveSuggestionUseCase>,
    set_query_use_case: Arc<dyn SetQueryUseCase>,
}

impl SessionApi {
    pub fn new(
        get_snapshot_use_case: Arc<dyn GetSessionSnapshotUseCase>,
        add_item_use_case: Arc<dyn AddBasketItemUseCase>,
        accept_suggestion_use_case: Arc<dyn AcceptSuggestionUseCase>,
        remove_basket_item_use_case: Arc<dyn RemoveBasketItemUseCase>,
        remove_suggestion_use_case: Arc<dyn RemoveSuggestionUseCase>,
        set_query_use_case: Arc<dyn SetQueryUseCase>,
    ) -> Self {
        Self {
            get_snapshot_use_case,
            add_item_use_case,
            accept_suggestion_use_case,
            remove_basket_item_use_case,
            remove_suggestion_use_case,
            set_query_use_case,
        }
    }
}

/// Shopping session API
///
/// Basket and query changes are applied immediately. Suggestions are
/// refreshed in the background; poll `GET /session` to read them.
#[OpenApi]
impl SessionApi {
    /// Current session
    ///
    /// Returns the basket, the latest suggestions and the query text.
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn get_session(&self) -> Json<SessionResponse> {
        Json(self.get_snapshot_use_case.execute().await.into())
    }

    /// Add a basket item
    ///
    /// An item with the same identifier is replaced and moved to the end.
    #[oai(path = "/session/basket", method = "post", tag = "ApiTags::Session")]
    async fn add_item(&self, body: Json<AddBasketItemRequest>) -> AddBasketItemResponse {
        let params = AddBasketItemParams {
            identifier: parse_identifier(&body.0.identifier, body.0.identifier_kind),
            name: body.0.name,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(fetch) => AddBasketItemResponse::Accepted(Json(fetch.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddBasketItemResponse::BadRequest(json),
                    _ => AddBasketItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a basket item
    ///
    /// Unknown identifiers are ignored. Suggestions are always refreshed.
    /// Pass the `identifier_kind` from the session response as `kind`.
    #[oai(path = "/session/basket/:id", method = "delete", tag = "ApiTags::Session")]
    async fn remove_basket_item(
        &self,
        id: Path<String>,
        kind: Query<Option<IdentifierKindDto>>,
    ) -> RemoveBasketItemResponse {
        let fetch = self
            .remove_basket_item_use_case
            .execute(RemoveBasketItemParams {
                identifier: parse_identifier(&id.0, kind.0),
            })
            .await;

        RemoveBasketItemResponse::Accepted(Json(fetch.into()))
    }

    /// Accept a suggestion
    ///
    /// Moves the suggested product into the basket.
    #[oai(
        path = "/session/suggestions/:id/accept",
        method = "post",
        tag = "ApiTags::Session"
    )]
    async fn accept_suggestion(
        &self,
        id: Path<String>,
        kind: Query<Option<IdentifierKindDto>>,
    ) -> AcceptSuggestionResponse {
        match self
            .accept_suggestion_use_case
            .execute(AcceptSuggestionParams {
                identifier: parse_identifier(&id.0, kind.0),
            })
            .await
        {
            Ok(fetch) => AcceptSuggestionResponse::Accepted(Json(fetch.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AcceptSuggestionResponse::NotFound(json),
                    _ => AcceptSuggestionResponse::InternalError(json),
                }
            }
        }
    }

    /// Dismiss a suggestion
    ///
    /// Removes it locally without asking the service for new suggestions.
    #[oai(
        path = "/session/suggestions/:id",
        method = "delete",
        tag = "ApiTags::Session"
    )]
    async fn remove_suggestion(
        &self,
        id: Path<String>,
        kind: Query<Option<IdentifierKindDto>>,
    ) -> RemoveSuggestionResponse {
        self.remove_suggestion_use_case
            .execute(RemoveSuggestionParams {
                identifier: parse_identifier(&id.0, kind.0),
            })
            .await;

        RemoveSuggestionResponse::NoContent
    }

    /// Set the search query
    #[oai(path = "/session/query", method = "put", tag = "ApiTags::Session")]
    async fn set_query(&self, body: Json<SetQueryRequest>) -> SetQueryResponse {
        let fetch = self
            .set_query_use_case
            .execute(SetQueryParams { query: body.0.query })
            .await;

        SetQueryResponse::Accepted(Json(fetch.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddBasketItemResponse {
    #[oai(status = 202)]
    Accepted(Json<SyncResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveBasketItemResponse {
    #[oai(status = 202)]
    Accepted(Json<SyncResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AcceptSuggestionResponse {
    #[oai(status = 202)]
    Accepted(Json<SyncResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveSuggestionResponse {
    #[oai(status = 204)]
    NoContent,
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetQueryResponse {
    #[oai(status = 202)]
    Accepted(Json<SyncResponse>),
}
