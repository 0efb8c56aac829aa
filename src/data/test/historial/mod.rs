use crate::{data::historial::HistorialRepository, model::historial::HistorialStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod update_status;
