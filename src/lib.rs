pub mod args;
pub mod error;
pub mod model {
    pub mod catalog;
    pub mod database;
    pub mod round;
}
pub mod mvu {
    pub mod play;
}
pub mod score;
pub mod controller {
    pub mod catalog;
    pub mod round_setup;
}
pub mod view {
    pub mod index;
    pub mod play;
    pub mod summary;
}

pub use error::AppError;
