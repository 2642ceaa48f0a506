//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP handlers, business rules, data access
//! and the infrastructure that wires them together. The backend uses Axum as the web
//! framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Validation, transactions and error translation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation-specific params and sort keys
//! - **Query Layer** (`query/`) - Filter, ordering and pagination resolution from query strings
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, date-filter offset, media store)
//! - **Startup** (`startup`) - Database, migrations, sessions and the first staff account
//! - **Router** (`router`) - Route table, OpenAPI document and static media
//! - **Utilities** (`util/`) - Validation rules, capacity arithmetic, parsing and media storage
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and resolves the current user
//! 3. **Controller** checks access, resolves query parameters, converts DTOs to params
//! 4. **Service** validates, opens a transaction where needed, calls repositories
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
