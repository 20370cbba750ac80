pub mod fighter;
