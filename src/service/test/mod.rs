use crate::{
    data::{group::GroupRepository, historial::HistorialRepository},
    error::AppError,
    model::{
        historial::HistorialStatus,
        request::{AnswerDecision, CreateRequestParams, RequestStatus, RequestType},
    },
    service::{
        capacity::{CapacityNotifier, MessageCollector},
        request::RequestService,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory::{self, course_group::CourseGroupFactory, request::RequestFactory},
};

mod fetch_requests;

/// Builds a database with every enrollment table and a notifier at the default 90%
/// threshold whose messages are collected for inspection.
async fn setup() -> (TestContext, CapacityNotifier, MessageCollector) {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let collector = MessageCollector::new();
    let notifier = CapacityNotifier::default().with_observer(collector.clone());

    (test, notifier, collector)
}
