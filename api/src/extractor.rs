use axum::extract::{FromRequest, FromRequestParts};
use shared::error::AppError;

/// `axum::Json` と同じだが、リクエストボディの解釈に失敗した場合も
/// `{ "error": ... }` 形式で返すためのエクストラクタ
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// クエリ文字列用。失敗時の扱いは `AppJson` と同じ
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
