//! Spot domain models, query parameters, and DTO conversions.
//!
//! Includes the listing filter and pagination value types. Out-of-range
//! paging values reset to their defaults rather than clamping to the maximum:
//! page 11 behaves like an omitted page, not like page 10.

use crate::model::spot::{
    CreateSpotDto, SpotDetailsDto, SpotDto, SpotImageDto, SpotListDto, SpotSummaryDto,
    UpdateSpotDto,
};
use crate::server::model::review::RatingSummary;

const DEFAULT_PAGE: u64 = 1;
const MAX_PAGE: u64 = 10;
const DEFAULT_SIZE: u64 = 20;
const MAX_SIZE: u64 = 20;

/// Resolved pagination window for spot listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub size: u64,
}

impl Page {
    /// Resolves raw query values into a pagination window.
    ///
    /// A page that is absent, zero, or greater than 10 resets to 1; a size
    /// that is absent, zero, or greater than 20 resets to 20. Out-of-range
    /// values reset to the default rather than the maximum.
    pub fn clamped(page: Option<u64>, size: Option<u64>) -> Self {
        let page = match page {
            Some(p) if (1..=MAX_PAGE).contains(&p) => p,
            _ => DEFAULT_PAGE,
        };
        let size = match size {
            Some(s) if (1..=MAX_SIZE).contains(&s) => s,
            _ => DEFAULT_SIZE,
        };

        Self { page, size }
    }

    /// Row offset for the window: size × (page − 1).
    pub fn offset(&self) -> u64 {
        self.size * (self.page - 1)
    }
}

/// Optional numeric bounds for the spot listing query.
///
/// Each dimension is independently optional; both bounds present means an
/// inclusive range, a single bound means an inclusive one-sided constraint,
/// absent bounds impose no constraint. The repository translates this value
/// type into the store's native query form.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpotFilter {
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Parameters for creating a spot.
#[derive(Debug, Clone)]
pub struct CreateSpotParams {
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
}

impl CreateSpotParams {
    /// Converts the request DTO plus the authenticated owner into params.
    pub fn from_dto(owner_id: i32, dto: CreateSpotDto) -> Self {
        Self {
            owner_id,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            lat: dto.lat,
            lng: dto.lng,
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}

/// Parameters for partially updating a spot; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateSpotParams {
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

impl From<UpdateSpotDto> for UpdateSpotParams {
    fn from(dto: UpdateSpotDto) -> Self {
        Self {
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            lat: dto.lat,
            lng: dto.lng,
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}

/// Spot with its listing aggregates: average rating and preview image.
#[derive(Debug, Clone)]
pub struct SpotSummary {
    pub spot: entity::spot::Model,
    pub avg_rating: Option<f64>,
    pub preview_image: Option<String>,
}

impl SpotSummary {
    /// Converts to the list-item DTO.
    pub fn into_dto(self) -> SpotSummaryDto {
        SpotSummaryDto {
            spot: to_spot_dto(self.spot),
            avg_rating: self.avg_rating,
            preview_image: self.preview_image,
        }
    }
}

/// Spot with its images, owner, and rating aggregate for the details view.
#[derive(Debug, Clone)]
pub struct SpotDetails {
    pub spot: entity::spot::Model,
    pub owner: entity::user::Model,
    pub images: Vec<entity::spot_image::Model>,
    pub rating: RatingSummary,
}

impl SpotDetails {
    /// Converts to the details DTO.
    pub fn into_dto(self) -> SpotDetailsDto {
        SpotDetailsDto {
            spot: to_spot_dto(self.spot),
            num_reviews: self.rating.review_count,
            avg_star_rating: self.rating.avg_rating,
            spot_images: self.images.into_iter().map(to_spot_image_dto).collect(),
            owner: self.owner.into(),
        }
    }
}

/// One page of spot summaries plus the resolved pagination values.
#[derive(Debug, Clone)]
pub struct PaginatedSpots {
    pub spots: Vec<SpotSummary>,
    pub page: u64,
    pub size: u64,
}

impl PaginatedSpots {
    /// Converts to the listing response DTO.
    pub fn into_dto(self) -> SpotListDto {
        SpotListDto {
            spots: self.spots.into_iter().map(SpotSummary::into_dto).collect(),
            page: self.page,
            size: self.size,
        }
    }
}

/// Converts a spot entity to its bare DTO.
pub fn to_spot_dto(spot: entity::spot::Model) -> SpotDto {
    SpotDto {
        id: spot.id,
        owner_id: spot.owner_id,
        address: spot.address,
        city: spot.city,
        state: spot.state,
        country: spot.country,
        lat: spot.lat,
        lng: spot.lng,
        name: spot.name,
        description: spot.description,
        price: spot.price,
        created_at: spot.created_at,
        updated_at: spot.updated_at,
    }
}

/// Converts a spot image entity to its DTO.
pub fn to_spot_image_dto(image: entity::spot_image::Model) -> SpotImageDto {
    SpotImageDto {
        id: image.id,
        url: image.url,
        preview: image.preview,
    }
}
