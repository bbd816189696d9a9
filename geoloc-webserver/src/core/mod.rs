pub use geoloc_core::{gateways, repositories, usecases};

pub mod entities {
    pub use geoloc_core::entities::*;
}
