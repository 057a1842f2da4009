pub mod api;

#[cfg(any(feature = "client", test))]
pub mod client;

pub mod configuration;

#[cfg(any(feature = "server", test))]
pub mod app_config;
#[cfg(any(feature = "server", test))]
pub mod application;
#[cfg(any(feature = "server", test))]
pub mod blueprint;
#[cfg(any(feature = "server", test))]
mod cors;
#[cfg(any(feature = "server", test))]
mod handlers;
#[cfg(any(feature = "server", test))]
pub mod recommendations;
#[cfg(any(feature = "server", test))]
pub mod recommendations_provider;
#[cfg(any(feature = "server", test))]
pub mod startup;
#[cfg(any(feature = "server", test))]
pub mod telemetry;
