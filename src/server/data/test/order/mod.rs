use crate::server::{
    data::order::OrderRepository,
    model::order::OrderSort,
    query::{filter::OrderFilter, ordering::resolve, pagination::PageRequest, QueryMap},
};
use chrono::{Offset, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod get_paginated;
