//! Infrastructure layer - database, state management, and error translation.

pub mod db;
pub mod db_errors;
pub mod state;
