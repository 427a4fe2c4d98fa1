use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Production pipeline stages. Serde enforces set membership at the API
/// boundary; whether stage order is enforced is an `OrderPolicy` concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Cutting,
    Stitching,
    Ready,
    #[serde(rename = "picked-up")]
    PickedUp,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Cutting => "cutting",
            OrderStatus::Stitching => "stitching",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked-up",
        }
    }

    /// Position in the pipeline, used by strict-transition checks.
    pub fn stage_index(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Cutting => 1,
            OrderStatus::Stitching => 2,
            OrderStatus::Ready => 3,
            OrderStatus::PickedUp => 4,
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "cutting" => Ok(OrderStatus::Cutting),
            "stitching" => Ok(OrderStatus::Stitching),
            "ready" => Ok(OrderStatus::Ready),
            "picked-up" => Ok(OrderStatus::PickedUp),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShirtMeasurements {
    pub length: String,
    pub arm_length: String,
    pub arm_hole: String,
    pub arm_cuff: String,
    pub teera: String,
    pub chest: String,
    pub waist: String,
    pub hip: String,
    pub daman: String,
    pub side_neck: String,
    pub neck_design: String,
    pub extra_details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrouserMeasurements {
    pub length: String,
    pub thigh: String,
    pub ankle: String,
    pub extra_details: String,
}

/// Fixed two-garment measurement sheet; every field is free text and blank
/// until the tailor fills it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    pub shirt: ShirtMeasurements,
    pub trouser: TrouserMeasurements,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub tracking_no: String,
    pub price: f64,
    pub dress_type: String,
    pub status: OrderStatus,
    /// Owner snapshot taken at creation; later renames do not touch orders.
    pub user_name: String,
    pub user_email: String,
    pub measurements: Measurements,
    pub created_at: DateTime<Utc>,
    pub picked_up_at: Option<DateTime<Utc>>,
}
