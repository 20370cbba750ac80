mod list;
mod seed;

pub use list::cmd_list_fighters;
pub use seed::cmd_seed;
