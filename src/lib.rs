pub mod api;
pub mod auth;
pub mod common;
pub mod config;
pub mod models;
pub mod web;
