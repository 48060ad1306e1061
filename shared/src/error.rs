use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{message}")]
    OperationFailed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// 失敗した操作ごとの固定メッセージを付与する。
    /// NotFound やリクエスト起因のエラーはそのまま返す。
    ///
    /// ```ignore
    /// repo.create(event).await.map_err(AppError::during("Error creating space"))?;
    /// ```
    pub fn during(message: &'static str) -> impl FnOnce(AppError) -> AppError {
        move |err| {
            if err.is_client_error() {
                err
            } else {
                AppError::OperationFailed {
                    message,
                    source: Box::new(err),
                }
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::EntityNotFound(_) | AppError::ValidationError(_) | AppError::InvalidRequest(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// パーサーのエラー文言はクライアントに返さず、ログにだけ残す
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error.message = %rejection.body_text(), "rejected request body");
        AppError::InvalidRequest("Invalid request body".into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(error.message = %rejection.body_text(), "rejected query string");
        AppError::InvalidRequest("Invalid query string".into())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // 5xx の詳細はログにのみ出力し、レスポンスには固定メッセージだけを返す
        let error = if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            match self {
                AppError::OperationFailed { message, .. } => message.to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        (status_code, Json(ErrorResponse { error })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
