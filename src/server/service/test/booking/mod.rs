use crate::server::error::AppError;
use crate::server::model::booking::{CreateBookingParams, SpotBookings};
use crate::server::service::booking::BookingService;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
