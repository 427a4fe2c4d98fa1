use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub tracking_no: String,
    pub price: f64,
    pub dress_type: String,
    pub status: String,
    pub user_name: String,
    pub user_email: String,
    /// Measurement sheet stored as a JSON document.
    pub measurements: Json,
    pub created_at: DateTimeWithTimeZone,
    pub picked_up_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
