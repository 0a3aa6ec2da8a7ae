pub mod results;
pub mod suggestions;
