//! EV charging-stop planner server.
//!
//! A web service that answers: "I have this much battery left and I'm going
//! there. Where should I stop to charge?"

pub mod domain;
pub mod planner;
pub mod routes_api;
pub mod stations;
pub mod web;
