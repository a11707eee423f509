mod component;
mod conversion;
mod string;

// component
pub use component::Component;

// conversion
pub use conversion::relative_luminance;
pub(crate) use conversion::{from_24bit, hsv_to_rgb, rgb_to_hsv, to_24bit};

// string
pub use string::normalize_hex;
pub(crate) use string::{format_hex, parse_hex};
