//
//  hangar-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Hangar API Resource Types
//!
//! Plain data records for every resource kind the API serves, each
//! implementing the [`Entity`](crate::api::Entity) contract with its own
//! field schema and path convention. No shared logic exists beyond what the
//! contract requires.
//!
//! | Type | Collection path | Key field |
//! |------|-----------------|-----------|
//! | [`Application`] | `application` | `app_id` |
//! | [`ClientRecord`] | `client` | `name` |
//! | [`Deploy`] | `deploys` | `deploy_id` |
//! | [`User`] | `users` | `_id` |
//! | [`Build`] | `builds` | `_id` |
//!
//! Each kind also has a read-only list entity (`*List`) decoding the
//! `_items`/`_meta` envelope, and [`Provider`]/[`Region`] are plain link
//! records with no entity behavior.

mod application;
mod build;
mod client;
mod deploy;
mod provider;
mod user;

pub use application::{Application, ApplicationList};
pub use build::{Build, BuildList};
pub use client::{ClientList, ClientRecord};
pub use deploy::{Deploy, DeployList};
pub use provider::{Provider, Region};
pub use user::{User, UserList};
