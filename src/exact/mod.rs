pub use branch_and_bound::{branch, BranchAndBound};

mod branch_and_bound;
