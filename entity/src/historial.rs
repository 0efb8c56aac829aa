use super::sea_orm_active_enums::HistorialStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "historial")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_code: String,
    pub status: HistorialStatus,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_group::Entity",
        from = "Column::GroupCode",
        to = "super::course_group::Column::GroupCode",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CourseGroup,
}

impl Related<super::course_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
