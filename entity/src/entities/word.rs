use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// One dictionary word, tagged with the locale it was imported for.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "word")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
    pub locale: String,
    pub in_use: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_word(text: &str, locale: &str) -> Self {
        ActiveModel {
            text: Set(text.to_owned()),
            locale: Set(locale.to_owned()),
            in_use: Set(true),
            ..Default::default()
        }
    }
}
