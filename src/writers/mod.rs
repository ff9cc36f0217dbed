pub mod chart_renderer;
pub mod table_writer;

pub use chart_renderer::ChartRenderer;
pub use table_writer::TableWriter;
