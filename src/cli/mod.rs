pub mod blocks;
pub mod review;
