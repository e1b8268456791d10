//! Display module - pure formatting of listing fields for the view layer.

mod display_format;

// Re-export the public interface
pub use display_format::{
    bathroom_display, format_availability, format_bedroom_bathroom, format_date, format_location,
    format_price, processed_image_url, truncate_text,
};
