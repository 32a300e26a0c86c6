use actix_web::{web, HttpResponse, Responder};
use crate::core::{notification_for_application, notification_for_request};
use crate::models::{HookResponse, MatchNotification};
use crate::routes::matches::{storage_error, AppState};

/// Configure the creation hooks
///
/// The request and application forms call these right after storing a new
/// record so the admin hears about strong matches.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/hooks/parent-requests/{id}", web::post().to(parent_request_created))
        .route("/hooks/nanny-applications/{id}", web::post().to(nanny_application_created));
}

/// POST /api/v1/hooks/parent-requests/{id}
async fn parent_request_created(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let request = match state.postgres.get_parent_request(&id).await {
        Ok(request) => request,
        Err(e) => return storage_error("Failed to load parent request", e),
    };

    let nannies = match state.postgres.get_nanny_applications().await {
        Ok(nannies) => nannies,
        Err(e) => return storage_error("Failed to load nanny applications", e),
    };

    let notification = notification_for_request(&request, &nannies, state.notify_min_score);
    store_notification(&state, notification).await
}

/// POST /api/v1/hooks/nanny-applications/{id}
async fn nanny_application_created(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    let application = match state.postgres.get_nanny_application(&id).await {
        Ok(application) => application,
        Err(e) => return storage_error("Failed to load nanny application", e),
    };

    let requests = match state.postgres.get_parent_requests().await {
        Ok(requests) => requests,
        Err(e) => return storage_error("Failed to load parent requests", e),
    };

    let notification = notification_for_application(&application, &requests, state.notify_min_score);
    store_notification(&state, notification).await
}

async fn store_notification(
    state: &AppState,
    notification: Option<MatchNotification>,
) -> HttpResponse {
    let Some(notification) = notification else {
        return HttpResponse::Ok().json(HookResponse {
            notified: false,
            notification: None,
        });
    };

    match state.postgres.create_notification(&notification).await {
        Ok(id) => {
            tracing::info!(
                "Notified match for {} (score {}, notification {})",
                notification.related_id,
                notification.score,
                id
            );
            HttpResponse::Ok().json(HookResponse {
                notified: true,
                notification: Some(notification),
            })
        }
        Err(e) => storage_error("Failed to store notification", e),
    }
}
