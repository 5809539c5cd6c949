pub use super::word::Entity as Word;
