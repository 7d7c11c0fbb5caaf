pub use forager_core::{AreaLogic, PolicyLogic, ProducerLogic};

pub mod area {
    pub use forager_core::area::*;
}
pub mod brain {
    pub use forager_core::brain::*;
}
pub mod food {
    pub use forager_core::food::*;
}
pub mod lifecycle {
    pub use forager_core::lifecycle::*;
}
pub mod metrics {
    pub use forager_core::metrics::*;
}
pub mod snapshot {
    pub use forager_core::snapshot::*;
}
pub mod systems {
    pub use forager_core::systems::*;
}

pub mod clock;
pub mod config;
pub mod world;
