use crate::server::{
    data::ticket::TicketRepository,
    model::ticket::{TicketParams, TicketSort},
    query::{ordering::resolve, pagination::PageRequest},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod count_by_journeys;
mod create;
mod find_by_id;
mod get_paginated;
