pub use super::fighter::Entity as Fighter;
