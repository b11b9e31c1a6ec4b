pub mod color;
pub mod config;
pub mod events;
pub mod pixel_grid;

pub use color::ColorKey;
pub use config::{
    OutputOrdering, PipelineConfig, TransportPolicy, DEFAULT_MAX_IDLE_CONNECTIONS,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_COLORS,
};
pub use events::{ImageFetchResult, OutputRecord, RankedColors, UrlEvent};
pub use pixel_grid::PixelGrid;
