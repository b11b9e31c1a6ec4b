pub mod fetcher;
pub mod http_client;
pub mod pipeline;
pub mod record_formatter;
pub mod record_sink;
pub mod reorder;
pub mod url_source;

pub use fetcher::{decode_image, Fetcher};
pub use http_client::{HttpClient, HttpResponse, ReqwestClient};
pub use pipeline::{Pipeline, RunSummary};
pub use record_formatter::format_record;
pub use record_sink::{FileSink, MemorySink, RecordSink};
pub use reorder::ReorderBuffer;
pub use url_source::{LineSource, UrlSource, VecSource};
