//! HTTP controllers.

pub mod health_controller;
pub mod todo_controller;
