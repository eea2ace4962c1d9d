pub mod article_view;
pub mod dot_rail;
pub mod progress_bar;
pub mod section_view;
pub mod status_bar;
pub mod toc;

pub use article_view::ArticleViewWidget;
pub use dot_rail::{DotRailWidget, RailGeometry};
pub use progress_bar::ProgressBarWidget;
pub use section_view::SectionViewWidget;
pub use status_bar::StatusBarWidget;
pub use toc::TocWidget;
