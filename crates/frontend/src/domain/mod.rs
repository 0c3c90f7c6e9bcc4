pub mod receiving;
