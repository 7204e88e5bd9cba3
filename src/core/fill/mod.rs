pub mod two_region;
