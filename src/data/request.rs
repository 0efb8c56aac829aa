//! Request data repository for database operations.
//!
//! This module provides the `RequestRepository` for persisting requests and querying the
//! views each role works from: a student's own requests, requests by status or type, and
//! a faculty's queue. Lists are returned most recent first.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::request::{CreateRequestParams, Request, RequestStatus, RequestType};

/// Repository providing database operations for enrollment requests.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating and counting request records.
pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    /// Creates a new RequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RequestRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new request in PENDING status.
    ///
    /// Both timestamps are set to `created_at`.
    ///
    /// # Arguments
    /// - `id` - Identifier generated for the request
    /// - `params` - Student, type, groups, faculty and description
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Request)` - The created request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        id: String,
        params: CreateRequestParams,
        created_at: DateTime<Utc>,
    ) -> Result<Request, DbErr> {
        let entity = entity::request::ActiveModel {
            id: ActiveValue::Set(id),
            student_id: ActiveValue::Set(params.student_id),
            request_type: ActiveValue::Set(params.request_type),
            origin_group: ActiveValue::Set(params.origin_group),
            destination_group: ActiveValue::Set(params.destination_group),
            status: ActiveValue::Set(RequestStatus::Pending),
            faculty_id: ActiveValue::Set(params.faculty_id),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        }
        .insert(self.db)
        .await?;

        Ok(Request::from_entity(entity))
    }

    /// Finds a request by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - Request found
    /// - `Ok(None)` - No request with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Request>, DbErr> {
        let entity = entity::prelude::Request::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Request::from_entity))
    }

    /// Sets the status of a request only if it still holds the expected status.
    ///
    /// Used to commit an answer so that two callers answering the same request cannot
    /// both move it out of its open status.
    ///
    /// # Arguments
    /// - `id` - Request ID
    /// - `expected` - Status the caller read before answering
    /// - `status` - New status
    /// - `updated_at` - Timestamp of the change
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The updated request
    /// - `Ok(None)` - Request missing or its status changed since it was read
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status_if(
        &self,
        id: &str,
        expected: RequestStatus,
        status: RequestStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Request>, DbErr> {
        let result = entity::prelude::Request::update_many()
            .col_expr(entity::request::Column::Status, Expr::value(status))
            .col_expr(entity::request::Column::UpdatedAt, Expr::value(updated_at))
            .filter(entity::request::Column::Id.eq(id))
            .filter(entity::request::Column::Status.eq(expected))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Gets all requests filed by a student, most recent first.
    pub async fn find_by_student(&self, student_id: &str) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::StudentId.eq(student_id))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Request::from_entity).collect())
    }

    /// Gets all requests in a status, most recent first.
    pub async fn find_by_status(&self, status: RequestStatus) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::Status.eq(status))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Request::from_entity).collect())
    }

    /// Gets all requests of a type, most recent first.
    pub async fn find_by_type(&self, request_type: RequestType) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::RequestType.eq(request_type))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Request::from_entity).collect())
    }

    /// Gets all requests owned by a faculty, most recent first.
    ///
    /// # Arguments
    /// - `faculty_id` - Faculty whose queue to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Request>)` - Requests assigned to the faculty in any status
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned_by_faculty(&self, faculty_id: &str) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::FacultyId.eq(faculty_id))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Request::from_entity).collect())
    }

    /// Counts all requests.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Request::find().count(self.db).await
    }

    /// Counts requests in a status.
    pub async fn count_by_status(&self, status: RequestStatus) -> Result<u64, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
