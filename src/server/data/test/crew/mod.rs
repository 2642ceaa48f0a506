use crate::server::{
    data::crew::CrewRepository,
    model::crew::{CrewParams, CrewSort},
    query::{ordering::resolve, pagination::PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
