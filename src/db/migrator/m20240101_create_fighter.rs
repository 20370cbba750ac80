use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again
        manager
            .create_table(
                Table::create()
                    .table(Fighter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Fighter::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Fighter::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Fighter::Origin).string_len(100).not_null())
                    .col(ColumnDef::new(Fighter::SpecialMove).string_len(100).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fighter::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Fighter {
    Table,
    Id,
    Name,
    Origin,
    SpecialMove,
}
