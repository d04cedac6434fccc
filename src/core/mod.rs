/// Business logic layer - services that own mutable application state
pub mod services;
