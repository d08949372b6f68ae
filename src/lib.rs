//! Container Assistant - Multilingual chat backend for container marketplaces
//!
//! This crate answers storefront chat messages for the ContainerBazar and
//! Containers Club sites. Each message is classified into an intent, grounded
//! with knowledge base content, answered by a language model in the visitor's
//! language and paired with a follow-up navigation action.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
