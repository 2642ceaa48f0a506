mod crew;
mod journey;
mod order;
mod route;
mod station;
mod ticket;
mod train;
mod user;
