use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The date primary key is the arbiter for concurrent rotation: the
        // second writer for a day hits a unique violation and re-reads.
        manager
            .create_table(
                Table::create()
                    .table(GatePasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GatePasses::Date)
                            .date()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GatePasses::Code).string().not_null())
                    .col(
                        ColumnDef::new(GatePasses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GatePasses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GatePasses {
    Table,
    Date,
    Code,
    CreatedAt,
}
