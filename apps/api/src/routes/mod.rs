pub mod health;


use axum::{
    routing::{get, post},
    Router,
};

use crate::registration::handle_check;
use crate::scoring::handlers::handle_resume_score;
use crate::sections::handlers::{
    handle_add_ach_info, handle_add_basic_info, handle_add_edu_info, handle_add_other_info,
    handle_add_project_info, handle_add_sum_info, handle_add_work_info,
};
use crate::state::AppState;
use crate::uploads::handlers::handle_upload_test;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Section creation
        .route("/add/basicInfo", post(handle_add_basic_info))
        .route("/add/workInfo", post(handle_add_work_info))
        .route("/add/projectInfo", post(handle_add_project_info))
        .route("/add/eduInfo", post(handle_add_edu_info))
        .route("/add/achInfo", post(handle_add_ach_info))
        .route("/add/sumInfo", post(handle_add_sum_info))
        .route("/add/otherInfo", post(handle_add_other_info))
        // Registration
        .route("/check", post(handle_check))
        // Uploads and scoring
        .route("/test", post(handle_upload_test))
        .route("/resumescore", post(handle_resume_score))
        .with_state(state)
}
