use sea_orm::entity::prelude::*;

/// Shared daily gate-entry code, one row per calendar day. The date primary
/// key arbitrates concurrent generation; rows are never mutated once written.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gate_passes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: chrono::NaiveDate,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
