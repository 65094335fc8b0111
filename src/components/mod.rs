mod filters;
mod not_found;
mod pagination;
mod product_details;
mod product_grid;
mod product_listing;
mod theme_toggle;
mod toolbar;
mod view_toggle;

pub use filters::Filters;
pub use not_found::NotFound;
pub use pagination::Pagination;
pub use product_details::ProductDetails;
pub use product_grid::ProductGrid;
pub use product_listing::ProductListing;
pub use theme_toggle::ThemeToggle;
pub use toolbar::Toolbar;
pub use view_toggle::ViewToggle;
