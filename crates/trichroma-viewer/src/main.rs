use anyhow::Result;
use winit::dpi::LogicalSize;

use trichroma_engine::device::GpuInit;
use trichroma_engine::logging::{init_logging, LoggingConfig};
use trichroma_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Trichroma".to_string(),
        initial_size: LogicalSize::new(960.0, 720.0),
    };

    log::info!("starting {} v{}", config.title, env!("CARGO_PKG_VERSION"));

    Runtime::run(config, GpuInit::default())
}
