use crate::data::group::GroupRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_code;
mod update_enrolled;
