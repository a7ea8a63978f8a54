//! Applications, their distribution metadata and their EULAs.

#[allow(clippy::module_inception)]
mod application;
mod eula;
mod executable;
mod flags;
mod install_parameters;
mod kind;
mod third_party_sku;

pub use self::{
    application::{Application, ApplicationBuilder, APPLICATIONS},
    eula::{Eula, EULAS},
    executable::ApplicationExecutable,
    flags::ApplicationFlags,
    install_parameters::ApplicationInstallParameters,
    kind::{ApplicationType, OAuth2Scope, OperatingSystem, SkuDistributor},
    third_party_sku::ThirdPartySku,
};
