mod accent_picker;
mod contribution_chart;
mod contributor_card;
mod contributor_grid;
mod contributors_placeholder;
mod header;
mod theme_toggle;

pub use accent_picker::AccentPicker;
pub use contribution_chart::ContributionChart;
pub use contributor_card::ContributorCard;
pub use contributor_grid::{ContributorGrid, ContributorGridEmpty};
pub use contributors_placeholder::ContributorsPlaceholder;
pub use header::Header;
pub use theme_toggle::ThemeToggle;
