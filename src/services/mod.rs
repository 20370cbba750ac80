pub mod fighter_service;
pub use fighter_service::{FighterError, FighterService};

pub mod fighter_service_impl;
pub use fighter_service_impl::SeaOrmFighterService;

pub mod seed;
pub use seed::seed_fighters;
