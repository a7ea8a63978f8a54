//! Guild integrations: Twitch and YouTube subscriptions, and installed
//! applications.

mod account;
mod application;
mod expire_behavior;
#[allow(clippy::module_inception)]
mod integration;
mod kind;

pub use self::{
    account::IntegrationAccount,
    application::IntegrationApplication,
    expire_behavior::IntegrationExpireBehavior,
    integration::{Integration, INTEGRATIONS},
    kind::IntegrationType,
};
