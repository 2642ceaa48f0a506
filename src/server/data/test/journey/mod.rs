use crate::server::{
    data::journey::JourneyRepository,
    model::journey::{JourneyParams, JourneySort},
    query::{filter::JourneyFilter, ordering::resolve, pagination::PageRequest, QueryMap},
};
use chrono::{DateTime, Duration, FixedOffset, Offset, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
mod update;

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}
