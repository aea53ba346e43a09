use sea_orm::entity::prelude::*;

/// Pending one-time passcode challenge. Keyed by canonical local phone so
/// there is at most one live challenge per phone; re-issuing upserts over
/// the previous row. Expiry is evaluated by callers at check time — rows are
/// not cleaned up in the background.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otp_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub phone: String,
    pub code: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub attempts: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
