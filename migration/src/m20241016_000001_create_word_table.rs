use sea_orm_migration::prelude::*;

const LOCALE_INDEX: &str = "idx-word-locale";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Word::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Word::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Word::Text).string().not_null())
                    .col(ColumnDef::new(Word::Locale).string().not_null())
                    .col(
                        ColumnDef::new(Word::InUse)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(LOCALE_INDEX)
                    .table(Word::Table)
                    .col(Word::Locale)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Word::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Word {
    Table,
    Id,
    Text,
    Locale,
    InUse,
}
