pub mod prelude;

pub mod fighter;
