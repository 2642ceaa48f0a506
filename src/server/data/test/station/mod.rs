use crate::server::{
    data::station::StationRepository,
    model::station::{StationParams, StationSort},
    query::{ordering::resolve, pagination::PageRequest},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod update;
