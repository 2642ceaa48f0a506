use crate::server::{
    data::train::TrainRepository,
    model::train::{TrainParams, TrainSort},
    query::{filter::TrainFilter, ordering::resolve, pagination::PageRequest},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod set_image;
