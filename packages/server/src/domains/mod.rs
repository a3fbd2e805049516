// Business domains
pub mod documents;
