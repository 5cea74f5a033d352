use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::database::catalog_repo::ActivityCatalog;
use crate::error::ActivityError;
use crate::models::ActivityRecord;
use crate::services::activities_service::{self, MessageView};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

// Query rejections are plain text by default; keep the `detail` JSON shape.
fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ActivityError> {
    match query {
        Ok(Query(q)) => Ok(q.email),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "query_rejected");
            Err(ActivityError::InvalidQuery(rejection.body_text()))
        }
    }
}

pub async fn activities_handler(
    State(catalog): State<Arc<ActivityCatalog>>,
) -> Json<IndexMap<String, ActivityRecord>> {
    Json(activities_service::list_activities(&catalog))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(catalog): State<Arc<ActivityCatalog>>,
) -> Result<Json<MessageView>, ActivityError> {
    let email = email_from(query)?;
    activities_service::signup(&catalog, &activity_name, &email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
            e
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(catalog): State<Arc<ActivityCatalog>>,
) -> Result<Json<MessageView>, ActivityError> {
    let email = email_from(query)?;
    activities_service::unregister(&catalog, &activity_name, &email)
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected");
            e
        })
}
