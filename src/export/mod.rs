/// Archive writers
pub mod archive;
/// Batch export pipeline, observer and cancellation
pub mod pipeline;
/// Render surfaces and rasterization
pub mod raster;
/// Archive destinations
pub mod sink;

pub use archive::{ArchiveWriter, ZipArchiveWriter};
pub use pipeline::{
    BatchExporter, CancellationToken, CardFailure, ExportObserver, ExportOptions, ExportReport,
    ExportState, FailurePolicy, progress_percent,
};
pub use raster::{ImageRasterizer, Rasterizer, SettlePolicy};
pub use sink::{DirectorySink, MemorySink, SaveSink};
