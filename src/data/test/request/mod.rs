use crate::{
    data::request::RequestRepository,
    model::request::{CreateRequestParams, RequestStatus, RequestType},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::request::RequestFactory};

mod count;
mod create;
mod find_by_id;
mod find_by_status;
mod find_by_student;
mod find_by_type;
mod find_owned_by_faculty;
mod update_status_if;
