use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod staff_exists;
