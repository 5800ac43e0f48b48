pub mod option;
pub mod results;
pub mod vote;
