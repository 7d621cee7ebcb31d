use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::Genres;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub city: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub state: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub address: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub phone: String,
    #[sea_orm(column_type = "String(Some(500))")]
    pub image_link: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub facebook_link: String,
    #[sea_orm(column_type = "String(Some(120))")]
    pub website_link: String,
    #[sea_orm(column_type = "Json")]
    pub genres: Genres,
    pub looking_for_talent: bool,
    #[sea_orm(column_type = "String(Some(500))")]
    pub seeking_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show::Entity")]
    Show,
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
