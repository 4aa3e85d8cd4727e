use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Bare spot fields, returned from create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotDto {
    pub id: i32,
    pub owner_id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Spot list item: bare fields plus the per-spot rating and preview image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotSummaryDto {
    #[serde(flatten)]
    pub spot: SpotDto,
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

/// Owner summary embedded in spot details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<UserDto> for OwnerDto {
    fn from(user: UserDto) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Spot image as returned from image endpoints and spot details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpotImageDto {
    pub id: i32,
    pub url: String,
    pub preview: bool,
}

/// Full spot details: bare fields, rating aggregate, images, and owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpotDetailsDto {
    #[serde(flatten)]
    pub spot: SpotDto,
    pub num_reviews: u64,
    pub avg_star_rating: Option<f64>,
    #[serde(rename = "SpotImages")]
    pub spot_images: Vec<SpotImageDto>,
    #[serde(rename = "Owner")]
    pub owner: OwnerDto,
}

/// Response envelope for `GET /spots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpotListDto {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotSummaryDto>,
    pub page: u64,
    pub size: u64,
}

/// Response envelope for `GET /spots/current-user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnedSpotsDto {
    #[serde(rename = "Spots")]
    pub spots: Vec<SpotSummaryDto>,
}

/// Response envelope for `GET /spots/{id}`. The `Spots` key wraps a single
/// object here, not a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpotDetailsResponseDto {
    #[serde(rename = "Spots")]
    pub spots: SpotDetailsDto,
}

/// Create request body for `POST /spots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSpotDto {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Partial update body for `PUT /spots/{id}`; only provided fields are mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSpotDto {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Request body for `POST /spots/{id}/images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSpotImageDto {
    pub url: String,
    pub preview: bool,
}
