use crate::server::{
    data::route::RouteRepository,
    model::route::{RouteParams, RouteSort},
    query::{filter::RouteFilter, ordering::resolve, pagination::PageRequest, QueryMap},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
