mod dashboard;
mod html;
mod sparkline;
mod style;

pub use dashboard::Dashboard;
pub use html::LinkBase;
