pub mod config;
pub mod evaluator;
pub mod model;
pub mod roster;
pub mod sanitize;
pub mod schedule;
pub mod seed;
pub mod web;
